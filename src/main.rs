use anyhow::Result;
use webe_date::cli::{self, Args};
use webe_date::config::Config;
use webe_date::logger;

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    if args.init_config {
        let path = match &args.config {
            Some(path) => path.into(),
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = args.load_config()?;
    logger::init(&config.logging)?;

    let now = chrono::Utc::now().timestamp_millis();
    for line in cli::render_lines(&args, &config, now)? {
        println!("{}", line);
    }

    Ok(())
}

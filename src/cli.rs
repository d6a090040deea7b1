use anyhow::{Context, Result};
use argh::FromArgs;

use crate::config::Config;
use crate::date::Zone;

#[derive(FromArgs, PartialEq, Debug, Default)]
/// Format timestamps with PHP date() tokens.
///
/// Negative timestamps must follow `--`, e.g. `webe-date -- -86400000`.
pub struct Args {
    /// date pattern, e.g. "D, M j, Y g:i A" (defaults to the configured date_format)
    #[argh(option, short = 'f')]
    pub format: Option<String>,

    /// render in UTC instead of the configured time zone
    #[argh(switch)]
    pub utc: bool,

    /// render at a fixed UTC offset such as +02:00
    #[argh(option)]
    pub offset: Option<String>,

    /// treat timestamps as Unix seconds instead of milliseconds
    #[argh(switch, short = 's')]
    pub seconds: bool,

    /// read configuration from this file
    #[argh(option, short = 'c')]
    pub config: Option<String>,

    /// write a default configuration file and exit
    #[argh(switch)]
    pub init_config: bool,

    /// timestamps to format (defaults to now)
    #[argh(positional)]
    pub timestamps: Vec<i64>,
}

impl Args {
    /// Zone chosen on the command line, falling back to the configured one
    pub fn zone(&self, config: &Config) -> Result<Zone> {
        if self.utc {
            return Ok(Zone::Utc);
        }
        match &self.offset {
            Some(offset) => offset
                .parse()
                .with_context(|| format!("Invalid --offset '{}'", offset)),
            None => Ok(config.display.timezone),
        }
    }

    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from_file(path),
            None => Config::load(),
        }
    }
}

/// Render one output line per timestamp, or one for `now_ms` when none were given
pub fn render_lines(args: &Args, config: &Config, now_ms: i64) -> Result<Vec<String>> {
    let zone = args.zone(config)?;
    let pattern = args.format.as_deref().unwrap_or(&config.display.date_format);

    let instants: Vec<i64> = if args.timestamps.is_empty() {
        vec![now_ms]
    } else if args.seconds {
        args.timestamps.iter().map(|s| s.saturating_mul(1000)).collect()
    } else {
        args.timestamps.clone()
    };

    log::debug!("Formatting {} timestamp(s) with {:?} in {}", instants.len(), pattern, zone);

    instants
        .into_iter()
        .map(|ms| {
            zone.try_format(ms, pattern)
                .with_context(|| format!("Cannot format timestamp {}", ms))
        })
        .collect()
}

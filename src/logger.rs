//! Logging setup
//!
//! Everything logs through the `log` macros. [`init`] installs a `fern` dispatcher:
//! warnings always go to stderr, and with logging enabled every record at the
//! configured level is appended to a file in the cache directory.

use crate::config::LoggingConfig;
use crate::constants::{APP_DIR_NAME, LOG_FILE_NAME};
use crate::date::{CalendarFields, INVALID_DATE};
use anyhow::{Context, Result};
use chrono::Local;
use log::{LevelFilter, Record};
use std::path::PathBuf;

/// Pattern for the time prefix of every log line
const LOG_TIME_FORMAT: &str = "Y-m-d H:i:s";

/// Format one log line
///
/// Times are always host local time, independent of the configured display zone.
/// Renders through [`CalendarFields`] directly, since the formatting entry points
/// themselves emit trace records.
pub fn format_line(timestamp_ms: i64, record: &Record<'_>) -> String {
    let time = CalendarFields::from_instant(timestamp_ms, &Local)
        .map(|fields| fields.render(LOG_TIME_FORMAT))
        .unwrap_or_else(|| INVALID_DATE.to_string());
    format!(
        "[{}.{:03} {} {}] {}",
        time,
        timestamp_ms.rem_euclid(1000),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Path of the log file
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::cache_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine cache directory"))
        .map(|dir| dir.join(APP_DIR_NAME).join(LOG_FILE_NAME))
}

/// Build the dispatcher for `config` without installing it
pub fn build_dispatch(config: &LoggingConfig) -> Result<fern::Dispatch> {
    let stderr = fern::Dispatch::new().level(LevelFilter::Warn).chain(std::io::stderr());

    let mut dispatch = fern::Dispatch::new()
        .format(|out, _message, record| {
            let now = chrono::Utc::now().timestamp_millis();
            out.finish(format_args!("{}", format_line(now, record)))
        })
        .chain(stderr);

    if config.enabled {
        let path = get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        dispatch = dispatch.level(config.level_filter()?).chain(file);
    } else {
        dispatch = dispatch.level(LevelFilter::Warn);
    }

    Ok(dispatch)
}

/// Install the global logger
pub fn init(config: &LoggingConfig) -> Result<()> {
    build_dispatch(config)?
        .apply()
        .context("Failed to install logger")?;
    log::debug!("Logging initialised at level {}", config.level);
    Ok(())
}

//! Constants used throughout the application
//!
//! Default strings shared by the configuration, the date picker and the CLI.

/// Default pattern for displaying a picked date
pub const DEFAULT_DATE_FORMAT: &str = "F j, Y";

/// Text shown by a date picker with no value
pub const DEFAULT_EMPTY_TEXT: &str = "No date set";

/// Default log level name
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "webe-date.toml";

/// Directory name under the platform config and cache directories
pub const APP_DIR_NAME: &str = "webe-date";

/// Log file name under the cache directory
pub const LOG_FILE_NAME: &str = "webe-date.log";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

//! webe-date - PHP `date()`-style timestamp formatting
//!
//! This library renders millisecond timestamps through the small token language
//! used by the WebEdition front end (`"F j, Y"`, `"g:i A"`, ...), and models the
//! date picker that displays them.
//!
//! # Modules
//!
//! * [`date`] - The formatter, its token table and calendar helpers
//! * [`picker`] - Date picker value model rendering through the formatter
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup
//! * [`cli`] - Argument parsing and rendering for the `webe-date` binary

/// Command-line front end
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Timestamp formatting
pub mod date;

/// Logging setup for the `log` facade
pub mod logger;

/// Date picker value model
pub mod picker;

pub use date::{date_format, format, format_in, DateError, WebeDate, Zone};
pub use picker::{DatePicker, PickerError, PickerSettings};

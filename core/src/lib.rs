//! Core services for TJD-Toolkit.
//!
//! - **`config`**: JSON-backed settings with dot-notation access and defaults
//! - **`platform`**: OS detection, privilege checks, app data directory
//! - **`errors`**: the shared [`ToolkitError`] taxonomy
//! - **`atomic_write`**: crash-safe file persistence (temp + rename)
//! - **`log_settings`**: logging preferences resolved from the config store

pub mod atomic_write;
pub mod config;
pub mod errors;
pub mod log_settings;
pub mod platform;

pub use config::{CONFIG_FILE_NAME, ConfigStore, default_config};
pub use errors::{Result, ToolkitError};
pub use log_settings::{LogSettings, parse_byte_size, rotate_if_oversized};
pub use platform::{app_data_dir, app_data_dir_for, is_admin, run_as_admin};

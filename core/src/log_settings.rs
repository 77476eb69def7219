//! Logging preferences resolved from the `logging` config section.

use std::fs;
use std::io;
use std::path::Path;

use crate::config::ConfigStore;

const DEFAULT_MAX_LOG_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// `tracing` filter directive, lowercase (`"info"`, `"debug"`, ...).
    pub level: String,
    pub file_logging: bool,
    pub max_log_size: u64,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_string(),
            file_logging: false,
            max_log_size: DEFAULT_MAX_LOG_SIZE,
        }
    }
}

impl LogSettings {
    #[must_use]
    pub fn from_config(config: &ConfigStore) -> Self {
        let level = config
            .get_or("logging.level", DEFAULT_LEVEL.to_string())
            .trim()
            .to_ascii_lowercase();
        let level = match level.as_str() {
            // Python-style names that tracing does not know.
            "warning" => "warn".to_string(),
            "critical" | "fatal" => "error".to_string(),
            "" => DEFAULT_LEVEL.to_string(),
            _ => level,
        };

        let raw_size: String = config.get_or("logging.max_log_size", "10MB".to_string());
        let max_log_size = parse_byte_size(&raw_size).unwrap_or_else(|| {
            tracing::warn!(value = %raw_size, "Unrecognized logging.max_log_size; using 10MB");
            DEFAULT_MAX_LOG_SIZE
        });

        Self {
            level,
            file_logging: config.get_or("logging.file_logging", false),
            max_log_size,
        }
    }
}

/// Parse sizes like `"10MB"`, `"512 KB"`, `"1gb"` or `"2048"` (bytes). Units are binary.
#[must_use]
pub fn parse_byte_size(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    let number: u64 = digits.parse().ok()?;
    let multiplier: u64 = match unit.trim().to_ascii_uppercase().as_str() {
        "" | "B" => 1,
        "K" | "KB" => 1024,
        "M" | "MB" => 1024 * 1024,
        "G" | "GB" => 1024 * 1024 * 1024,
        _ => return None,
    };
    number.checked_mul(multiplier)
}

/// Move `path` to `path.1` when it has grown past `max_bytes`.
///
/// Returns whether a rotation happened. A missing file is not an error.
pub fn rotate_if_oversized(path: &Path, max_bytes: u64) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(meta) => meta.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max_bytes {
        return Ok(false);
    }
    let mut rotated = path.as_os_str().to_owned();
    rotated.push(".1");
    fs::rename(path, rotated)?;
    Ok(true)
}

//! JSON-backed configuration with dot-notation access.
//!
//! Settings live in `<app data dir>/config.json`. Every load deep-merges the
//! built-in defaults under the user's document, so readers can rely on each
//! default key being present. Writes persist immediately.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};

use crate::atomic_write::{FileSyncPolicy, atomic_write, recover_bak_file};
use crate::errors::{Result, ToolkitError};
use crate::platform::app_data_dir;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// The default configuration document.
#[must_use]
pub fn default_config() -> Map<String, Value> {
    let defaults = json!({
        "theme": "system",
        "window": { "width": 1186, "height": 733 },
        "auto_check_updates": true,
        "tools": { "feature_eins": true },
        "ui": {
            "show_tooltips": true,
            "confirm_destructive_actions": true,
            "auto_refresh_browser_list": true
        },
        "logging": { "level": "INFO", "file_logging": false, "max_log_size": "10MB" }
    });
    match defaults {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

#[derive(Debug, Clone)]
enum Persistence {
    File(PathBuf),
    /// In-memory only; `save` is a no-op.
    Ephemeral,
}

/// Hierarchical settings store.
///
/// ```no_run
/// # fn demo() -> tjd_core::Result<()> {
/// let mut config = tjd_core::ConfigStore::open_default()?;
/// config.set("theme", "dark")?;
/// assert_eq!(config.get_or("theme", String::new()), "dark");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigStore {
    persistence: Persistence,
    values: Map<String, Value>,
}

impl ConfigStore {
    /// Open (or create) `config.json` inside `dir`.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let mut store = Self {
            persistence: Persistence::File(dir.as_ref().join(CONFIG_FILE_NAME)),
            values: default_config(),
        };
        store.load()?;
        Ok(store)
    }

    /// Open the store in the platform app data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(app_data_dir()?)
    }

    /// A store holding defaults that never touches the filesystem.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self {
            persistence: Persistence::Ephemeral,
            values: default_config(),
        }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match &self.persistence {
            Persistence::File(path) => Some(path),
            Persistence::Ephemeral => None,
        }
    }

    #[must_use]
    pub fn is_ephemeral(&self) -> bool {
        matches!(self.persistence, Persistence::Ephemeral)
    }

    /// Re-read the document from disk, writing defaults if the file is missing.
    pub fn load(&mut self) -> Result<()> {
        let path = match &self.persistence {
            Persistence::File(path) => path.clone(),
            Persistence::Ephemeral => {
                self.values = default_config();
                return Ok(());
            }
        };

        recover_bak_file(&path);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "No configuration file; writing defaults");
                self.values = default_config();
                return self.save();
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Could not load config file: {e}");
                return Err(ToolkitError::file_operation(
                    "load",
                    format!("Cannot read configuration file: {e}"),
                    path,
                    e,
                ));
            }
        };

        let parsed: Value = serde_json::from_str(&content).map_err(|source| {
            tracing::error!(path = %path.display(), "Invalid JSON in config file: {source}");
            ToolkitError::JsonParsing {
                message: format!("Invalid JSON syntax in configuration file: {source}"),
                source,
            }
        })?;

        let Value::Object(user) = parsed else {
            return Err(ToolkitError::configuration(format!(
                "Failed to load configuration: {} must contain a JSON object",
                path.display()
            )));
        };

        self.values = merge_maps(default_config(), user);
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(())
    }

    /// Write the document to disk as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let Persistence::File(path) = &self.persistence else {
            tracing::debug!("Ephemeral configuration; skipping save");
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ToolkitError::file_operation(
                    "save",
                    format!("Cannot create configuration directory: {e}"),
                    parent,
                    e,
                )
            })?;
        }

        let mut bytes =
            serde_json::to_vec_pretty(&self.values).map_err(|source| ToolkitError::JsonParsing {
                message: format!("Cannot serialize configuration to JSON: {source}"),
                source,
            })?;
        bytes.push(b'\n');

        atomic_write(path, &bytes, FileSyncPolicy::SyncAll).map_err(|e| {
            tracing::error!(path = %path.display(), "Could not save config file: {e}");
            ToolkitError::file_operation(
                "save",
                format!("Cannot write configuration file: {e}"),
                path.clone(),
                e,
            )
        })
    }

    /// Look up a value by dot-separated path.
    ///
    /// Traversal through a non-object and explicit `null` both read as absent.
    pub fn get(&self, key: &str) -> Result<Option<&Value>> {
        let parts = split_key(key)?;
        let Some((last, parents)) = parts.split_last() else {
            return Ok(None);
        };

        let mut map = &self.values;
        for part in parents {
            match map.get(*part) {
                Some(Value::Object(next)) => map = next,
                _ => return Ok(None),
            }
        }
        Ok(map.get(*last).filter(|value| !value.is_null()))
    }

    /// Typed lookup. A value that does not deserialize as `T` reads as absent.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let Some(value) = self.get(key)? else {
            return Ok(None);
        };
        match T::deserialize(value) {
            Ok(typed) => Ok(Some(typed)),
            Err(e) => {
                tracing::warn!(key, "Ignoring configuration value of unexpected type: {e}");
                Ok(None)
            }
        }
    }

    /// Typed lookup falling back to `default` for absent, mistyped or invalid keys.
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.get_as(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(e) => {
                tracing::warn!(key, "Invalid configuration key: {e}");
                default
            }
        }
    }

    /// Store `value` at `key`, creating intermediate objects, then persist.
    pub fn set(&mut self, key: &str, value: impl Serialize) -> Result<()> {
        let parts = split_key(key)?;
        let value = serde_json::to_value(value).map_err(|source| ToolkitError::JsonParsing {
            message: format!("Cannot serialize value for configuration key '{key}': {source}"),
            source,
        })?;
        let Some((last, parents)) = parts.split_last() else {
            return Ok(());
        };

        let mut map = &mut self.values;
        for part in parents {
            let entry = map
                .entry((*part).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            map = match entry {
                Value::Object(next) => next,
                _ => {
                    return Err(ToolkitError::validation(
                        format!(
                            "Cannot set key '{key}': path element '{part}' is not a dictionary"
                        ),
                        "key",
                        key,
                    ));
                }
            };
        }
        map.insert((*last).to_string(), value);
        tracing::debug!(key, "Configuration value set");
        self.save()
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        let mut map = &self.values;
        let mut parts = key.split('.').peekable();
        while let Some(part) = parts.next() {
            match map.get(part) {
                None => return false,
                Some(_) if parts.peek().is_none() => return true,
                Some(Value::Object(next)) => map = next,
                Some(_) => return false,
            }
        }
        false
    }

    /// Remove `key`. Returns whether anything was removed; removal persists.
    pub fn delete(&mut self, key: &str) -> Result<bool> {
        let parts: Vec<&str> = key.split('.').collect();
        let Some((last, parents)) = parts.split_last() else {
            return Ok(false);
        };

        let mut map = &mut self.values;
        for part in parents {
            match map.get_mut(*part) {
                Some(Value::Object(next)) => map = next,
                _ => return Ok(false),
            }
        }
        if map.remove(*last).is_none() {
            return Ok(false);
        }
        tracing::debug!(key, "Configuration value deleted");
        self.save()?;
        Ok(true)
    }

    /// A copy of the object at `section`; empty when absent or not an object.
    pub fn section(&self, section: &str) -> Result<Map<String, Value>> {
        Ok(match self.get(section)? {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        })
    }

    /// Shallow-merge `values` into `section` and persist.
    pub fn update_section(&mut self, section: &str, values: Map<String, Value>) -> Result<()> {
        let mut current = self.section(section)?;
        current.extend(values);
        self.set(section, Value::Object(current))
    }

    pub fn reset_to_defaults(&mut self) -> Result<()> {
        self.values = default_config();
        tracing::info!("Configuration reset to defaults");
        self.save()
    }

    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }
}

fn split_key(key: &str) -> Result<Vec<&str>> {
    if key.is_empty() {
        return Err(ToolkitError::validation(
            "Configuration key cannot be empty",
            "key",
            "<empty>",
        ));
    }
    let parts: Vec<&str> = key.split('.').collect();
    if parts.iter().any(|part| part.is_empty()) {
        return Err(ToolkitError::validation(
            format!("Configuration key '{key}' contains an empty path segment"),
            "key",
            key,
        ));
    }
    Ok(parts)
}

/// Deep merge: nested objects merge recursively, anything else from `current` wins.
fn merge_maps(mut base: Map<String, Value>, current: Map<String, Value>) -> Map<String, Value> {
    for (key, value) in current {
        let merged = match (base.remove(&key), value) {
            (Some(Value::Object(default)), Value::Object(user)) => {
                Value::Object(merge_maps(default, user))
            }
            (_, user) => user,
        };
        base.insert(key, merged);
    }
    base
}

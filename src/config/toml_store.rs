//! TOML-file store with file locking.
//!
//! One table per scope identifier, keyed by the setting's camelCase name:
//!
//! ```toml
//! [extension-kit]
//! enableFeature = false
//! maxItems = 25
//! ```
//!
//! Global writes lock a `.lock` file next to the settings file, re-read the
//! file from disk, edit it with `toml_edit` (comments and unrelated entries
//! survive), and write it back. This keeps concurrent processes from losing
//! each other's updates. Session writes live in memory and shadow the file.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use toml_edit::{DocumentMut, Item, Table};

use crate::path::format_path_for_display;

use super::ConfigError;
use super::path::get_config_path;
use super::store::{ConfigStore, ConfigTarget};

/// Acquire an exclusive lock on the settings file for read-modify-write operations.
///
/// Uses a `.lock` file alongside the settings file to coordinate between processes.
/// The lock is released when the returned guard is dropped.
pub(crate) fn acquire_config_lock(config_path: &Path) -> Result<File, ConfigError> {
    let lock_path = config_path.with_extension("toml.lock");

    // Create parent directory if needed
    if let Some(parent) = lock_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::io("create", parent, e))?;
    }

    let file = std::fs::OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)
        .map_err(|e| ConfigError::io("open", &lock_path, e))?;

    file.lock_exclusive()
        .map_err(|e| ConfigError::io("lock", &lock_path, e))?;

    Ok(file)
}

#[derive(Debug)]
pub struct TomlStore {
    path: PathBuf,
    /// `None` marks a key removed for this session only.
    session: BTreeMap<(String, String), Option<toml::Value>>,
}

impl TomlStore {
    /// Store backed by an explicit file. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            session: BTreeMap::new(),
        }
    }

    /// Store at the resolved settings path (`--config`, `EXTKIT_CONFIG_PATH`, or platform default).
    pub fn open_default() -> Result<Self, ConfigError> {
        get_config_path()
            .map(Self::new)
            .ok_or(ConfigError::NoConfigPath)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ConfigError::io("read", &self.path, e)),
        }
    }

    fn read_persisted(&self, scope: &str, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        let Some(content) = self.read_content()? else {
            return Ok(None);
        };
        let table: toml::Table = content.parse().map_err(|e: toml::de::Error| {
            ConfigError::parse(&self.path, e.message().to_string())
        })?;

        Ok(table
            .get(scope)
            .and_then(toml::Value::as_table)
            .and_then(|section| section.get(key))
            .cloned())
    }

    fn write_persisted(
        &self,
        scope: &str,
        key: &str,
        value: Option<toml::Value>,
    ) -> Result<(), ConfigError> {
        let _lock = acquire_config_lock(&self.path)?;

        let content = self.read_content()?.unwrap_or_default();
        let mut doc: DocumentMut = content
            .parse()
            .map_err(|e: toml_edit::TomlError| ConfigError::parse(&self.path, e.message()))?;

        match value {
            Some(value) => {
                // toml::Value renders as an inline TOML value
                let rendered = value.to_string();
                let mut edit_value: toml_edit::Value = rendered.parse().map_err(|e| {
                    ConfigError::Serialize {
                        key: key.to_string(),
                        message: format!("{e}"),
                    }
                })?;
                edit_value.decor_mut().clear();

                if !doc.contains_key(scope) {
                    doc.insert(scope, Item::Table(Table::new()));
                }
                let section = doc[scope].as_table_like_mut().ok_or_else(|| {
                    ConfigError::parse(&self.path, format!("`{scope}` is not a table"))
                })?;
                section.insert(key, Item::Value(edit_value));
            }
            None => {
                let now_empty = match doc.get_mut(scope).and_then(Item::as_table_like_mut) {
                    Some(section) => {
                        section.remove(key);
                        section.is_empty()
                    }
                    None => false,
                };
                if now_empty {
                    doc.remove(scope);
                }
            }
        }

        let output = doc.to_string();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::io("create", parent, e))?;
        }
        std::fs::write(&self.path, output).map_err(|e| ConfigError::io("write", &self.path, e))?;

        log::debug!(
            "Saved {scope}.{key} to {}",
            format_path_for_display(&self.path)
        );
        Ok(())
    }
}

impl ConfigStore for TomlStore {
    fn read(&self, scope: &str, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        if let Some(value) = self.session.get(&(scope.to_string(), key.to_string())) {
            return Ok(value.clone());
        }
        self.read_persisted(scope, key)
    }

    fn write(
        &mut self,
        scope: &str,
        key: &str,
        value: Option<toml::Value>,
        target: ConfigTarget,
    ) -> Result<(), ConfigError> {
        let entry = (scope.to_string(), key.to_string());
        match target {
            ConfigTarget::Session => {
                self.session.insert(entry, value);
                Ok(())
            }
            ConfigTarget::Global => {
                self.write_persisted(scope, key, value)?;
                // A global write supersedes any session override for the same key
                self.session.remove(&entry);
                Ok(())
            }
        }
    }
}

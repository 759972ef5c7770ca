//! Host-side persistence behind a [`ConfigurationScope`](super::ConfigurationScope).
//!
//! Values cross this boundary as [`toml::Value`], so any serde type can be
//! stored without the store knowing about it. Entries are addressed by
//! `(scope identifier, key)`.

use std::collections::BTreeMap;

use super::ConfigError;

/// Where a write lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigTarget {
    /// Persisted outside the process lifetime.
    #[default]
    Global,
    /// Visible until the store is dropped, never persisted.
    Session,
}

pub trait ConfigStore {
    /// Current value, or `None` when never set.
    fn read(&self, scope: &str, key: &str) -> Result<Option<toml::Value>, ConfigError>;

    /// Overwrite the value; `None` removes it.
    fn write(
        &mut self,
        scope: &str,
        key: &str,
        value: Option<toml::Value>,
        target: ConfigTarget,
    ) -> Result<(), ConfigError>;
}

impl<S: ConfigStore + ?Sized> ConfigStore for Box<S> {
    fn read(&self, scope: &str, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        (**self).read(scope, key)
    }

    fn write(
        &mut self,
        scope: &str,
        key: &str,
        value: Option<toml::Value>,
        target: ConfigTarget,
    ) -> Result<(), ConfigError> {
        (**self).write(scope, key, value, target)
    }
}

/// In-memory store. Both targets behave the same.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<(String, String), toml::Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn read(&self, scope: &str, key: &str) -> Result<Option<toml::Value>, ConfigError> {
        Ok(self
            .entries
            .get(&(scope.to_string(), key.to_string()))
            .cloned())
    }

    fn write(
        &mut self,
        scope: &str,
        key: &str,
        value: Option<toml::Value>,
        _target: ConfigTarget,
    ) -> Result<(), ConfigError> {
        let entry = (scope.to_string(), key.to_string());
        match value {
            Some(value) => {
                self.entries.insert(entry, value);
            }
            None => {
                self.entries.remove(&entry);
            }
        }
        Ok(())
    }
}

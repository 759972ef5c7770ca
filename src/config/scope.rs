//! Typed settings access for one scope identifier.

use std::fmt;

use strum::IntoEnumIterator;

use super::ConfigError;
use super::settings::{Setting, SettingName, key};
use super::store::{ConfigStore, ConfigTarget};

/// Runs `$body` with `$key` bound to the key descriptor for a runtime [`SettingName`].
macro_rules! with_setting {
    ($name:expr, |$key:ident| $body:expr) => {
        match $name {
            SettingName::EnableFeature => {
                type $key = key::EnableFeature;
                $body
            }
            SettingName::MaxItems => {
                type $key = key::MaxItems;
                $body
            }
            SettingName::CustomMessage => {
                type $key = key::CustomMessage;
                $body
            }
            SettingName::LogLevel => {
                type $key = key::LogLevel;
                $body
            }
        }
    };
}

/// Notification that a setting changed through this scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigChangeEvent {
    scope: String,
    key: SettingName,
}

impl ConfigChangeEvent {
    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn key(&self) -> SettingName {
        self.key
    }

    pub fn affects(&self, key: SettingName) -> bool {
        self.key == key
    }

    /// Whether the change falls under a dotted section: `"<scope>"` or `"<scope>.<key>"`.
    pub fn affects_section(&self, section: &str) -> bool {
        section == self.scope
            || section
                .strip_prefix(self.scope.as_str())
                .and_then(|rest| rest.strip_prefix('.'))
                .is_some_and(|rest| rest == self.key.as_str())
    }
}

type Listener = Box<dyn FnMut(&ConfigChangeEvent) + Send>;

pub struct ConfigurationScope<S = Box<dyn ConfigStore>> {
    identifier: String,
    store: S,
    listeners: Vec<Listener>,
}

impl<S: ConfigStore> ConfigurationScope<S> {
    pub fn new(identifier: impl Into<String>, store: S) -> Self {
        Self {
            identifier: identifier.into(),
            store,
            listeners: Vec::new(),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored value, or `None` when the key was never set.
    pub fn get<K: Setting>(&self) -> Result<Option<K::Value>, ConfigError> {
        let Some(stored) = self.store.read(&self.identifier, K::NAME.as_str())? else {
            return Ok(None);
        };
        stored
            .try_into::<K::Value>()
            .map(Some)
            .map_err(|e| ConfigError::TypeMismatch {
                scope: self.identifier.clone(),
                key: K::NAME,
                message: e.message().to_string(),
            })
    }

    /// The stored value, or `default` when unset.
    pub fn get_or<K: Setting>(&self, default: K::Value) -> Result<K::Value, ConfigError> {
        Ok(self.get::<K>()?.unwrap_or(default))
    }

    /// The stored value, or the key's built-in default when unset.
    pub fn get_or_default<K: Setting>(&self) -> Result<K::Value, ConfigError> {
        Ok(self.get::<K>()?.unwrap_or_else(K::default_value))
    }

    /// Validate and persist globally, overwriting any previous value.
    pub fn set<K: Setting>(&mut self, value: K::Value) -> Result<(), ConfigError> {
        self.update::<K>(value, ConfigTarget::Global)
    }

    /// Validate and write to `target`.
    pub fn update<K: Setting>(
        &mut self,
        value: K::Value,
        target: ConfigTarget,
    ) -> Result<(), ConfigError> {
        K::validate(&value).map_err(|reason| ConfigError::InvalidValue {
            key: K::NAME,
            value: value.to_string(),
            reason,
        })?;

        let serialized = toml::Value::try_from(&value).map_err(|e| ConfigError::Serialize {
            key: K::NAME.to_string(),
            message: e.to_string(),
        })?;
        self.store
            .write(&self.identifier, K::NAME.as_str(), Some(serialized), target)?;

        log::debug!("Set {}.{} = {value} ({target:?})", self.identifier, K::NAME);
        self.notify(K::NAME);
        Ok(())
    }

    /// Remove a stored value so reads fall back to defaults again.
    pub fn reset<K: Setting>(&mut self) -> Result<(), ConfigError> {
        self.reset_name(K::NAME)
    }

    /// Remove every known key in this scope.
    pub fn reset_all(&mut self) -> Result<(), ConfigError> {
        for name in SettingName::iter() {
            self.reset_name(name)?;
        }
        Ok(())
    }

    /// Register a listener called after every successful set or reset.
    pub fn on_did_change(&mut self, listener: impl FnMut(&ConfigChangeEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ------------------------------------------------------------------------
    // Runtime-keyed access, for callers choosing a key from user input
    // ------------------------------------------------------------------------

    /// Stored value rendered with `Display`, or `None` when unset.
    pub fn get_raw(&self, name: SettingName) -> Result<Option<String>, ConfigError> {
        with_setting!(name, |K| Ok(self.get::<K>()?.map(|v| v.to_string())))
    }

    /// Value with the default applied, rendered with `Display`.
    pub fn get_raw_or_default(&self, name: SettingName) -> Result<String, ConfigError> {
        with_setting!(name, |K| Ok(self.get_or_default::<K>()?.to_string()))
    }

    /// Parse `raw` into the key's type, validate, and persist globally.
    ///
    /// Returns the value as it will read back (e.g. `"0010"` becomes `"10"`).
    pub fn set_raw(&mut self, name: SettingName, raw: &str) -> Result<String, ConfigError> {
        with_setting!(name, |K| {
            let value = raw
                .parse::<<K as Setting>::Value>()
                .map_err(|e| ConfigError::InvalidValue {
                    key: name,
                    value: raw.to_string(),
                    reason: e.to_string(),
                })?;
            let rendered = value.to_string();
            self.set::<K>(value)?;
            Ok(rendered)
        })
    }

    /// Whether anything is stored under `name`, without checking its type.
    pub fn is_set(&self, name: SettingName) -> Result<bool, ConfigError> {
        Ok(self.store.read(&self.identifier, name.as_str())?.is_some())
    }

    pub fn reset_raw(&mut self, name: SettingName) -> Result<(), ConfigError> {
        self.reset_name(name)
    }

    fn reset_name(&mut self, name: SettingName) -> Result<(), ConfigError> {
        self.store
            .write(&self.identifier, name.as_str(), None, ConfigTarget::Global)?;
        log::debug!("Reset {}.{name}", self.identifier);
        self.notify(name);
        Ok(())
    }

    fn notify(&mut self, key: SettingName) {
        if self.listeners.is_empty() {
            return;
        }
        let event = ConfigChangeEvent {
            scope: self.identifier.clone(),
            key,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }
}

impl SettingName {
    /// The key's built-in default, rendered with `Display`.
    pub fn default_display(self) -> String {
        with_setting!(self, |K| K::default_value().to_string())
    }
}

impl<S> fmt::Debug for ConfigurationScope<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigurationScope")
            .field("identifier", &self.identifier)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

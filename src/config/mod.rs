//! Settings for the extension, scoped by its identifier.
//!
//! # Layers
//!
//! - [`settings`]: typed key descriptors ([`key::MaxItems`], …) and their rules
//! - [`ConfigurationScope`]: typed get/set against one scope identifier
//! - [`ConfigStore`]: host persistence ([`TomlStore`] on disk, [`MemoryStore`] in memory)
//! - [`ResolvedSettings`]: every key with defaults applied
//!
//! ```
//! use extension_kit::config::{ConfigurationScope, MemoryStore, key};
//!
//! let mut scope = ConfigurationScope::new("extension-kit", MemoryStore::new());
//! assert_eq!(scope.get::<key::MaxItems>().unwrap(), None);
//!
//! scope.set::<key::MaxItems>(25).unwrap();
//! assert_eq!(scope.get::<key::MaxItems>().unwrap(), Some(25));
//!
//! // Validation runs before anything is persisted
//! assert!(scope.set::<key::MaxItems>(500).is_err());
//! assert_eq!(scope.get::<key::MaxItems>().unwrap(), Some(25));
//! ```

use std::path::Path;

pub mod path;
mod resolved;
mod scope;
pub mod settings;
mod store;
mod toml_store;

pub use path::{get_config_path, get_log_dir, set_config_path};
pub use resolved::ResolvedSettings;
pub use scope::{ConfigChangeEvent, ConfigurationScope};
pub use settings::{LogLevel, Setting, SettingName, key};
pub use store::{ConfigStore, ConfigTarget, MemoryStore};
pub use toml_store::TomlStore;

use crate::path::format_path_for_display;

/// Errors from reading, validating, or persisting settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Rejected by the key's validation rule; nothing was persisted
    #[error("invalid value for {key}: {value} ({reason})")]
    InvalidValue {
        key: SettingName,
        value: String,
        reason: String,
    },

    /// A stored value doesn't deserialize into the key's type
    #[error("stored value for {scope}.{key} has the wrong type: {message}")]
    TypeMismatch {
        scope: String,
        key: SettingName,
        message: String,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    #[error("failed to {action} {path}")]
    Io {
        action: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {key}: {message}")]
    Serialize { key: String, message: String },

    #[error("cannot determine config directory; set $HOME or $XDG_CONFIG_HOME")]
    NoConfigPath,
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: format_path_for_display(path),
            source,
        }
    }

    pub(crate) fn parse(path: &Path, message: impl Into<String>) -> Self {
        Self::Parse {
            path: format_path_for_display(path),
            message: message.into(),
        }
    }
}

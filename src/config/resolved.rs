//! Resolved settings with all defaults applied.
//!
//! `ResolvedSettings` is a snapshot of every key for one scope, so callers use
//! `settings.max_items` instead of `scope.get_or_default::<key::MaxItems>()?`
//! at each use site.

use serde::Serialize;

use super::ConfigError;
use super::scope::ConfigurationScope;
use super::settings::{LogLevel, SettingName, key};
use super::store::ConfigStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSettings {
    pub enable_feature: bool,
    pub max_items: u32,
    pub custom_message: String,
    pub log_level: LogLevel,
}

impl ResolvedSettings {
    pub fn load<S: ConfigStore>(scope: &ConfigurationScope<S>) -> Result<Self, ConfigError> {
        Ok(Self {
            enable_feature: scope.get_or_default::<key::EnableFeature>()?,
            max_items: scope.get_or_default::<key::MaxItems>()?,
            custom_message: scope.get_or_default::<key::CustomMessage>()?,
            log_level: scope.get_or_default::<key::LogLevel>()?,
        })
    }

    /// Whether a message at `level` should be reported under the configured `logLevel`.
    pub fn should_log(&self, level: LogLevel) -> bool {
        self.log_level.allows(level)
    }

    /// `(name, value)` pairs in declaration order, values rendered with `Display`.
    pub fn entries(&self) -> [(SettingName, String); 4] {
        [
            (SettingName::EnableFeature, self.enable_feature.to_string()),
            (SettingName::MaxItems, self.max_items.to_string()),
            (SettingName::CustomMessage, self.custom_message.clone()),
            (SettingName::LogLevel, self.log_level.to_string()),
        ]
    }
}

//! The closed set of settings keys.
//!
//! Each key is a zero-sized type implementing [`Setting`], which ties its
//! persisted name to its value type, default, and validation rule. Typed
//! access (`scope.get::<key::MaxItems>()`) can only ever produce a `u32`.
//!
//! [`SettingName`] mirrors the same set at runtime for callers that pick a key
//! from user input.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Persisted names of every setting, as they appear in the config file.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "camelCase")]
pub enum SettingName {
    EnableFeature,
    MaxItems,
    CustomMessage,
    LogLevel,
}

impl SettingName {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A typed settings key.
pub trait Setting {
    type Value: Serialize
        + DeserializeOwned
        + FromStr<Err: Display>
        + Display
        + Debug
        + Clone
        + PartialEq;

    const NAME: SettingName;

    fn default_value() -> Self::Value;

    /// Check a value before it is persisted. `Err` carries the reason shown to the user.
    fn validate(_value: &Self::Value) -> Result<(), String> {
        Ok(())
    }
}

/// Minimum level of messages the extension reports.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Whether a message at `level` passes this threshold.
    pub fn allows(self, level: LogLevel) -> bool {
        level >= self
    }
}

/// Key descriptors, one per [`SettingName`].
pub mod key {
    use super::{Setting, SettingName};

    pub const MAX_ITEMS_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
    pub const CUSTOM_MESSAGE_MAX_CHARS: usize = 100;

    /// Toggles the optional feature. Defaults to on.
    pub struct EnableFeature;

    impl Setting for EnableFeature {
        type Value = bool;
        const NAME: SettingName = SettingName::EnableFeature;

        fn default_value() -> bool {
            true
        }
    }

    /// Upper bound on items processed per command, 1–100.
    pub struct MaxItems;

    impl Setting for MaxItems {
        type Value = u32;
        const NAME: SettingName = SettingName::MaxItems;

        fn default_value() -> u32 {
            10
        }

        fn validate(value: &u32) -> Result<(), String> {
            if MAX_ITEMS_RANGE.contains(value) {
                Ok(())
            } else {
                Err(format!(
                    "must be between {} and {}",
                    MAX_ITEMS_RANGE.start(),
                    MAX_ITEMS_RANGE.end()
                ))
            }
        }
    }

    /// Greeting shown by the hello-world command.
    pub struct CustomMessage;

    impl Setting for CustomMessage {
        type Value = String;
        const NAME: SettingName = SettingName::CustomMessage;

        fn default_value() -> String {
            "Hello from Extension!".to_string()
        }

        fn validate(value: &String) -> Result<(), String> {
            let chars = value.chars().count();
            if chars == 0 {
                Err("must not be empty".to_string())
            } else if chars > CUSTOM_MESSAGE_MAX_CHARS {
                Err(format!(
                    "must be at most {CUSTOM_MESSAGE_MAX_CHARS} characters (got {chars})"
                ))
            } else {
                Ok(())
            }
        }
    }

    pub struct LogLevel;

    impl Setting for LogLevel {
        type Value = super::LogLevel;
        const NAME: SettingName = SettingName::LogLevel;

        fn default_value() -> super::LogLevel {
            super::LogLevel::default()
        }
    }
}

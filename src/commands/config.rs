//! Settings commands.
//!
//! Values go to stdout for piping; confirmations and notes go to stderr.

use color_print::cformat;
use extension_kit::config::{ResolvedSettings, SettingName};
use extension_kit::styling::{eprintln, hint_message, info_message, println, success_message};

use super::HarnessExtension;
use crate::cli::{ConfigCommand, OutputFormat};

pub fn handle_config(
    extension: &mut HarnessExtension,
    command: ConfigCommand,
) -> anyhow::Result<()> {
    match command {
        ConfigCommand::Get { key } => handle_get(extension, key),
        ConfigCommand::Set { key, value } => handle_set(extension, key, &value),
        ConfigCommand::Reset { key } => handle_reset(extension, key),
        ConfigCommand::List { format } => handle_list(extension, format),
    }
}

/// Handle `extkit config get`
fn handle_get(extension: &HarnessExtension, key: SettingName) -> anyhow::Result<()> {
    match extension.settings().get_raw(key)? {
        Some(value) => println!("{value}"),
        None => {
            println!("{}", key.default_display());
            eprintln!(
                "{}",
                hint_message(cformat!("<bold>{key}</> is not set; showing the default"))
            );
        }
    }
    Ok(())
}

/// Handle `extkit config set`
fn handle_set(
    extension: &mut HarnessExtension,
    key: SettingName,
    raw: &str,
) -> anyhow::Result<()> {
    let value = extension.update_setting(key, raw)?;
    eprintln!(
        "{}",
        success_message(cformat!("<bold>{key}</> updated to: <bold>{value}</>"))
    );
    Ok(())
}

/// Handle `extkit config reset`
fn handle_reset(
    extension: &mut HarnessExtension,
    key: Option<SettingName>,
) -> anyhow::Result<()> {
    let msg = match key {
        Some(key) => {
            // Untyped check so a wrong-typed value can still be cleared
            let was_set = extension.settings().is_set(key)?;
            extension.settings_mut().reset_raw(key)?;
            if was_set {
                success_message(cformat!("Reset <bold>{key}</> to its default"))
            } else {
                info_message(cformat!("<bold>{key}</> was not set"))
            }
        }
        None => {
            extension.settings_mut().reset_all()?;
            success_message("Settings reset to default values")
        }
    };
    eprintln!("{msg}");
    Ok(())
}

/// Handle `extkit config list`
fn handle_list(extension: &HarnessExtension, format: OutputFormat) -> anyhow::Result<()> {
    let resolved = ResolvedSettings::load(extension.settings())?;
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&resolved)?);
        }
        OutputFormat::Text => {
            for (name, value) in resolved.entries() {
                let marker = if extension.settings().is_set(name)? {
                    ""
                } else {
                    " (default)"
                };
                println!("{name} = {value}{marker}");
            }
        }
    }
    Ok(())
}

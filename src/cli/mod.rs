use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use extension_kit::config::SettingName;

/// Scope identifier used when `--scope` is not given.
pub const DEFAULT_SCOPE: &str = "extension-kit";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Host harness for the extension core: output channel and settings
#[derive(Parser)]
#[command(name = "extkit", version, about, long_about = None)]
pub struct Cli {
    /// Verbose output (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file path (default: platform config dir, or $EXTKIT_CONFIG_PATH)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Extension identifier; names the settings scope and the output channel
    #[arg(long, value_name = "ID", default_value = DEFAULT_SCOPE, global = true)]
    pub scope: String,

    /// Directory holding output channel logs (default: platform data dir, or $EXTKIT_LOG_DIR)
    #[arg(long, value_name = "PATH", global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Append a message to the output channel
    ///
    /// `{0}`, `{1}`, … in the message are replaced by the matching argument.
    /// Tokens without an argument are kept as written.
    Log {
        /// Message, optionally with `{N}` placeholders
        message: String,

        /// Values for the placeholders
        args: Vec<String>,
    },

    /// Print the output channel's contents
    Show,

    /// Run the hello-world command
    ///
    /// Greets with `customMessage`, or "Hello World!" when it is unset.
    Hello,

    /// Read and write settings
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print a setting's value
    ///
    /// Unset settings print their default, with a note on stderr.
    Get {
        /// Setting name (enableFeature, maxItems, customMessage, logLevel)
        key: SettingName,
    },

    /// Validate and persist a setting
    Set {
        /// Setting name (enableFeature, maxItems, customMessage, logLevel)
        key: SettingName,

        /// New value
        value: String,
    },

    /// Remove a setting so it falls back to its default
    Reset {
        /// Setting name; all settings when omitted
        key: Option<SettingName>,
    },

    /// List every setting with defaults applied
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

//! Command handlers for the `extkit` host harness.
//!
//! Every invocation runs the whole extension lifecycle: the channel is opened
//! on `<log-dir>/<scope>.log`, the extension activates, the command runs, and
//! the extension deactivates (even when the command failed).

mod config;

use std::path::{Path, PathBuf};

use anyhow::Context;
use extension_kit::Extension;
use extension_kit::config::{ConfigurationScope, TomlStore, get_log_dir};
use extension_kit::output::{FileSink, Message, OutputChannel, channel_log_path};
use extension_kit::styling::{info_message, println};

use crate::cli::{Cli, Commands};

pub use config::handle_config;

pub type HarnessExtension = Extension<TomlStore>;

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let log_dir = resolve_log_dir(cli.log_dir)?;
    let store = TomlStore::open_default()?;
    log::debug!("Using settings file {}", store.path().display());

    let channel = OutputChannel::create(
        cli.scope.clone(),
        FileSink::for_channel(&log_dir, &cli.scope),
    );
    let settings = ConfigurationScope::new(cli.scope, store);
    let mut extension = Extension::activate(channel, settings);

    let result = match cli.command {
        Commands::Log { message, args } => handle_log(&extension, message, args),
        Commands::Show => handle_show(&extension, &log_dir),
        Commands::Hello => handle_hello(&extension),
        Commands::Config(command) => handle_config(&mut extension, command),
    };

    extension.deactivate();
    result
}

fn resolve_log_dir(explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    explicit
        .or_else(get_log_dir)
        .context("Cannot determine log directory. Pass --log-dir or set $EXTKIT_LOG_DIR")
}

/// Handle `extkit log`
fn handle_log(
    extension: &HarnessExtension,
    message: String,
    args: Vec<String>,
) -> anyhow::Result<()> {
    extension.channel().out(&Message::placeholder(message, args));
    Ok(())
}

/// Handle `extkit show`
fn handle_show(extension: &HarnessExtension, log_dir: &Path) -> anyhow::Result<()> {
    extension.channel().reveal();

    let path = channel_log_path(log_dir, extension.channel().name());
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    for line in content.lines() {
        println!("{line}");
    }
    Ok(())
}

/// Handle `extkit hello`
fn handle_hello(extension: &HarnessExtension) -> anyhow::Result<()> {
    let message = extension.hello_world()?;
    println!("{}", info_message(message));
    Ok(())
}

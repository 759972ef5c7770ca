use std::process;

use clap::Parser;
use extension_kit::config::set_config_path;
use extension_kit::styling::{eprintln, error_message};

mod cli;
mod commands;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(path) = cli.config.clone() {
        set_config_path(path);
    }

    if let Err(e) = commands::run(cli) {
        eprintln!("{}", error_message(format!("{e:#}")));
        process::exit(1);
    }
}

/// Diagnostic logging to stderr. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();
}

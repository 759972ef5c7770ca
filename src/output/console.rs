//! Terminal sink: every channel line goes straight to stderr.

use std::io::{self, Write};

use crate::styling::eprintln;

use super::traits::ChannelSink;

/// Writes lines to stderr, leaving stdout free for data.
#[derive(Debug, Default)]
pub struct ConsoleSink {
    prefix: Option<String>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix each line with `[name] `, for hosts mixing several channels on one terminal.
    pub fn with_prefix(name: impl Into<String>) -> Self {
        Self {
            prefix: Some(name.into()),
        }
    }

    fn render(&self, line: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("[{prefix}] {line}"),
            None => line.to_string(),
        }
    }
}

impl ChannelSink for ConsoleSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        eprintln!("{}", self.render(line));
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        // Already on screen
        io::stderr().flush()
    }
}

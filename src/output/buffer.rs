//! In-memory sink.
//!
//! Clones share the same buffer, so the host keeps one clone as its view while
//! the channel owns the other.

use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::traits::ChannelSink;

#[derive(Debug, Default)]
struct BufferState {
    lines: Vec<String>,
    reveals: usize,
    disposed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct BufferSink {
    state: Arc<Mutex<BufferState>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.state().lines.clone()
    }

    /// Buffer contents as the view renders them: each line newline-terminated.
    pub fn contents(&self) -> String {
        self.state()
            .lines
            .iter()
            .flat_map(|line| [line.as_str(), "\n"])
            .collect()
    }

    /// How many times the view was brought to the foreground.
    pub fn reveal_count(&self) -> usize {
        self.state().reveals
    }

    pub fn is_disposed(&self) -> bool {
        self.state().disposed
    }

    fn state(&self) -> MutexGuard<'_, BufferState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChannelSink for BufferSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.state().lines.push(line.to_string());
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        self.state().reveals += 1;
        Ok(())
    }

    fn dispose(&mut self) -> io::Result<()> {
        self.state().disposed = true;
        Ok(())
    }
}

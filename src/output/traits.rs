//! Host-side sink behind an output channel
//!
//! A host renders the channel somewhere (an editor panel, a log file, the
//! terminal). The channel only needs three operations from it; creation is
//! the sink's own constructor.

use std::io;

/// Where an [`OutputChannel`](super::OutputChannel) sends its lines.
pub trait ChannelSink: Send {
    /// Append one line. The sink supplies the line terminator.
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    /// Bring the rendered view to the foreground. Must not change the contents.
    fn show(&mut self) -> io::Result<()>;

    /// Release the sink. Called exactly once, after the last append.
    fn dispose(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ChannelSink + ?Sized> ChannelSink for Box<S> {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        (**self).append_line(line)
    }

    fn show(&mut self) -> io::Result<()> {
        (**self).show()
    }

    fn dispose(&mut self) -> io::Result<()> {
        (**self).dispose()
    }
}

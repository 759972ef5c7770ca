//! The output channel: one named, append-only sink per running extension.
//!
//! The channel is created once by the owner (see [`Extension`](crate::Extension))
//! and lent out by reference to anything that logs. [`OutputChannel::dispose`]
//! takes the channel by value, so no append can happen after disposal.

use std::sync::{Mutex, PoisonError};

use super::message::Message;
use super::traits::ChannelSink;

pub struct OutputChannel {
    name: String,
    sink: Mutex<Box<dyn ChannelSink>>,
}

impl OutputChannel {
    /// Create the channel. Call once at startup.
    pub fn create(name: impl Into<String>, sink: impl ChannelSink + 'static) -> Self {
        let name = name.into();
        log::debug!("Created output channel {name:?}");
        Self {
            name,
            sink: Mutex::new(Box::new(sink)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Format `message` and append it as one line.
    ///
    /// Never fails: sink errors are logged at debug level and dropped, so a
    /// broken log destination can't take down the caller.
    pub fn out(&self, message: &Message) {
        self.append_line(&message.format());
    }

    /// Append an already formatted line.
    pub fn append_line(&self, line: &str) {
        self.with_sink(|sink| {
            if let Err(e) = sink.append_line(line) {
                log::debug!("Failed to append to output channel {:?}: {e}", self.name);
            }
        });
    }

    /// Bring the channel's view to the foreground.
    pub fn reveal(&self) {
        self.with_sink(|sink| {
            if let Err(e) = sink.show() {
                log::debug!("Failed to reveal output channel {:?}: {e}", self.name);
            }
        });
    }

    /// Release the channel and its sink.
    pub fn dispose(self) {
        let Self { name, sink } = self;
        let mut sink = sink.into_inner().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = sink.dispose() {
            log::debug!("Failed to dispose output channel {name:?}: {e}");
        }
        log::debug!("Disposed output channel {name:?}");
    }

    // A panic while holding the lock leaves the buffer intact, so poisoning is ignored.
    fn with_sink<R>(&self, f: impl FnOnce(&mut dyn ChannelSink) -> R) -> R {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        f(sink.as_mut())
    }
}

impl std::fmt::Debug for OutputChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputChannel")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Append a template message to a channel: `out!(channel, "Opened ", url, "")`.
///
/// Takes the same alternating fragment/value arguments as [`template!`](crate::template).
#[macro_export]
macro_rules! out {
    ($channel:expr, $($parts:tt)+) => {
        $channel.out(&$crate::template!($($parts)+))
    };
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;

    use super::*;
    use crate::output::BufferSink;
    use crate::placeholder;

    struct FailingSink;

    impl ChannelSink for FailingSink {
        fn append_line(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::other("disk full"))
        }

        fn show(&mut self) -> io::Result<()> {
            Err(io::Error::other("no view"))
        }

        fn dispose(&mut self) -> io::Result<()> {
            Err(io::Error::other("already gone"))
        }
    }

    #[test]
    fn test_appends_in_call_order() {
        let sink = BufferSink::new();
        let channel = OutputChannel::create("test", sink.clone());

        channel.out(&placeholder!("first {0}", 1));
        out!(channel, "second ", 2, "");
        channel.out(&Message::literal("third"));

        assert_eq!(sink.lines(), ["first 1", "second 2", "third"]);
    }

    #[test]
    fn test_reveal_leaves_contents_alone() {
        let sink = BufferSink::new();
        let channel = OutputChannel::create("test", sink.clone());
        channel.out(&Message::literal("line"));

        channel.reveal();
        channel.reveal();

        assert_eq!(sink.reveal_count(), 2);
        assert_eq!(sink.lines(), ["line"]);
    }

    #[test]
    fn test_dispose_reaches_sink() {
        let sink = BufferSink::new();
        let channel = OutputChannel::create("test", sink.clone());
        assert!(!sink.is_disposed());

        channel.dispose();

        assert!(sink.is_disposed());
    }

    #[test]
    fn test_sink_errors_are_swallowed() {
        let channel = OutputChannel::create("broken", FailingSink);
        channel.out(&Message::literal("ignored"));
        channel.reveal();
        channel.dispose();
    }

    #[test]
    fn test_shared_across_threads() {
        let sink = BufferSink::new();
        let channel = Arc::new(OutputChannel::create("threads", sink.clone()));

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let channel = Arc::clone(&channel);
                std::thread::spawn(move || channel.out(&placeholder!("worker {0}", i)))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let mut lines = sink.lines();
        lines.sort();
        assert_eq!(lines, ["worker 0", "worker 1", "worker 2", "worker 3"]);
    }

    #[test]
    fn test_name() {
        let channel = OutputChannel::create("Code Folding", BufferSink::new());
        assert_eq!(channel.name(), "Code Folding");
        assert!(format!("{channel:?}").contains("Code Folding"));
    }
}

//! Output layer: message formatting and the extension's output channel.
//!
//! # Architecture
//!
//! The channel is an explicitly owned value, not a global. The owner creates it
//! once at startup with a host-provided sink, lends `&OutputChannel` to anything
//! that logs, and disposes it at shutdown:
//!
//! ```rust
//! use extension_kit::output::{BufferSink, OutputChannel};
//! use extension_kit::{out, placeholder};
//!
//! let view = BufferSink::new();
//! let channel = OutputChannel::create("extension-kit", view.clone());
//!
//! out!(channel, "", "extension-kit", " activated");
//! channel.out(&placeholder!("Found {0} matching files", 3));
//! channel.reveal();
//! channel.dispose();
//!
//! assert_eq!(view.contents(), "extension-kit activated\nFound 3 matching files\n");
//! ```
//!
//! ## Sinks
//!
//! - [`BufferSink`]: in-memory buffer with a shared view handle
//! - [`FileSink`]: append-only log file with size-based rotation
//! - [`ConsoleSink`]: lines to stderr

mod buffer;
mod channel;
mod console;
pub mod file;
mod message;
mod traits;

pub use buffer::BufferSink;
pub use channel::OutputChannel;
pub use console::ConsoleSink;
pub use file::{FileSink, channel_log_path};
pub use message::{Message, MessageError, PlaceholderMessage, TemplateMessage, format};
pub use traits::ChannelSink;

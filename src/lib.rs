//! Core of an editor add-on: message formatting, the output channel, and typed
//! settings scoped by the extension identifier.
//!
//! ```
//! use extension_kit::config::{ConfigurationScope, MemoryStore, key};
//! use extension_kit::output::{BufferSink, OutputChannel};
//! use extension_kit::{placeholder, template};
//!
//! let sink = BufferSink::new();
//! let channel = OutputChannel::create("extension-kit", sink.clone());
//! channel.out(&template!("Processed ", "main.rs", " (", 12, " lines)"));
//! channel.out(&placeholder!("Processing {0} of {1}", "file.ts", 10));
//! assert_eq!(sink.lines(), ["Processed main.rs (12 lines)", "Processing file.ts of 10"]);
//!
//! let scope = ConfigurationScope::new("extension-kit", MemoryStore::new());
//! assert_eq!(scope.get_or::<key::MaxItems>(10).unwrap(), 10);
//! ```

pub mod config;
pub mod extension;
pub mod output;
pub mod path;
pub mod styling;

pub use extension::{Disposable, Extension};
pub use output::{Message, OutputChannel};

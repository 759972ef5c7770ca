//! File-backed sink for hosts without a live view.
//!
//! Lines go to `<log-dir>/<channel>.log`, which persists across runs so the
//! channel reads as one continuous log.
//!
//! # Growth control
//!
//! Before each write, the file size is checked. If >1MB, the current file is
//! renamed to `<channel>.log.old` and a fresh file is started. This bounds
//! storage to ~2MB worst case.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::path::{channel_file_name, format_path_for_display};
use crate::styling::{eprintln, info_message};

use super::traits::ChannelSink;

/// Maximum log file size before rotation (1MB).
const MAX_LOG_SIZE: u64 = 1_048_576;

#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    max_size: u64,
    file: Option<File>,
}

impl FileSink {
    /// Sink writing to an explicit file path. Nothing is created until the first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            max_size: MAX_LOG_SIZE,
            file: None,
        }
    }

    /// Sink for a named channel inside `log_dir`.
    pub fn for_channel(log_dir: &Path, channel_name: &str) -> Self {
        Self::new(channel_log_path(log_dir, channel_name))
    }

    /// Override the rotation threshold.
    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn rotate_if_needed(&mut self) {
        if let Ok(metadata) = fs::metadata(&self.path)
            && metadata.len() > self.max_size
        {
            let old_path = rotated_path(&self.path);
            if let Err(e) = fs::rename(&self.path, &old_path) {
                log::debug!(
                    "Failed to rotate {}: {e}",
                    format_path_for_display(&self.path)
                );
            }
            self.file = None; // Force re-open after rotation
        }
    }

    fn open(&mut self) -> io::Result<&mut File> {
        if self.file.is_none() {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)?;
            self.file = Some(file);
        }
        self.file
            .as_mut()
            .ok_or_else(|| io::Error::other("log file not open"))
    }
}

impl ChannelSink for FileSink {
    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.rotate_if_needed();
        let file = self.open()?;

        // Single write_all to avoid interleaving with concurrent processes
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        file.write_all(buf.as_bytes())
    }

    fn show(&mut self) -> io::Result<()> {
        eprintln!(
            "{}",
            info_message(format!(
                "Output channel: {}",
                format_path_for_display(&self.path)
            ))
        );
        Ok(())
    }

    fn dispose(&mut self) -> io::Result<()> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(())
    }
}

/// Where a named channel's log lives inside `log_dir`.
pub fn channel_log_path(log_dir: &Path, channel_name: &str) -> PathBuf {
    log_dir.join(channel_file_name(channel_name))
}

fn rotated_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".old");
    path.with_file_name(name)
}

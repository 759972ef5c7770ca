//! Styling for user-facing terminal messages.
//!
//! This module uses the anstyle ecosystem:
//! - anstream for auto-detecting color support
//! - anstyle for composable styling
//!
//! The output channel never sees these styles. Channel lines are plain text;
//! styling only applies to what the host harness prints on the terminal.

use anstyle::{AnsiColor, Color, Style};

// ============================================================================
// Re-exports from anstream (auto-detecting output)
// ============================================================================

/// Auto-detecting println that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::println;

/// Auto-detecting eprintln that respects NO_COLOR, CLICOLOR_FORCE, and terminal capabilities
pub use anstream::eprintln;

// ============================================================================
// Semantic Style Constants
// ============================================================================

/// Error style (red) - use as `{ERROR}text{ERROR:#}`
pub const ERROR: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red)));

/// Warning style (yellow) - use as `{WARNING}text{WARNING:#}`
pub const WARNING: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

/// Success style (green) - use as `{SUCCESS}text{SUCCESS:#}`
pub const SUCCESS: Style = Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green)));

/// Hint style (dimmed) - use as `{HINT}text{HINT:#}`
pub const HINT: Style = Style::new().dimmed();

// ============================================================================
// Message Emojis
// ============================================================================

pub const ERROR_EMOJI: &str = "❌";

pub const WARNING_EMOJI: &str = "🟡";

pub const SUCCESS_EMOJI: &str = "✅";

pub const HINT_EMOJI: &str = "💡";

pub const INFO_EMOJI: &str = "⚪";

// ============================================================================
// Message formatting
// ============================================================================

/// Error message: `❌ message` in red
pub fn error_message(message: impl AsRef<str>) -> String {
    format!("{ERROR_EMOJI} {ERROR}{}{ERROR:#}", message.as_ref())
}

/// Warning message: `🟡 message` in yellow
pub fn warning_message(message: impl AsRef<str>) -> String {
    format!("{WARNING_EMOJI} {WARNING}{}{WARNING:#}", message.as_ref())
}

/// Success message: `✅ message` in green
pub fn success_message(message: impl AsRef<str>) -> String {
    format!("{SUCCESS_EMOJI} {SUCCESS}{}{SUCCESS:#}", message.as_ref())
}

/// Hint message: `💡 message`, dimmed
pub fn hint_message(message: impl AsRef<str>) -> String {
    format!("{HINT_EMOJI} {HINT}{}{HINT:#}", message.as_ref())
}

/// Info message: `⚪ message`, unstyled
pub fn info_message(message: impl AsRef<str>) -> String {
    format!("{INFO_EMOJI} {}", message.as_ref())
}

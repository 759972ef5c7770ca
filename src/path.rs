use std::path::{Path, PathBuf};

/// Get the user's home directory.
///
/// Uses the `home` crate which handles platform-specific detection:
/// - Unix: `$HOME` environment variable
/// - Windows: `USERPROFILE` or `HOMEDRIVE`/`HOMEPATH`
pub fn home_dir() -> Option<PathBuf> {
    home::home_dir()
}

/// Format a filesystem path for user-facing output.
///
/// Replaces home directory prefix with `~` (e.g., `/Users/alex/.config/extension-kit` ->
/// `~/.config/extension-kit`). Paths outside home are returned unchanged.
pub fn format_path_for_display(path: &Path) -> String {
    if let Some(home) = home_dir()
        && let Ok(stripped) = path.strip_prefix(&home)
    {
        if stripped.as_os_str().is_empty() {
            return "~".to_string();
        }

        let mut display_path = PathBuf::from("~");
        display_path.push(stripped);
        return display_path.display().to_string();
    }

    path.display().to_string()
}

/// File name used to persist an output channel's contents.
///
/// Channel names are free-form display strings ("Code Folding", "my/ext"), so
/// they are sanitized before being used as a path component. An empty result
/// falls back to `output`.
pub fn channel_file_name(channel_name: &str) -> String {
    let sanitized = sanitize_filename::sanitize(channel_name.trim());
    if sanitized.is_empty() {
        "output.log".to_string()
    } else {
        format!("{sanitized}.log")
    }
}

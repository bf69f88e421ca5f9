//! Platform path utilities.
//!
//! This module resolves where the board keeps its configuration and log
//! files, and expands `~` in user-supplied paths.

use std::path::PathBuf;

const APP_DIR: &str = "activity-board";

/// Returns the data directory for log files.
///
/// `<data local dir>/activity-board`, e.g. `~/.local/share/activity-board`
/// on Linux. Falls back to the system temp directory when the platform has
/// no notion of a data directory.
///
/// # Examples
///
/// ```
/// use activity_board::infrastructure::get_data_dir;
///
/// assert!(get_data_dir().ends_with("activity-board"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR)
}

/// Returns the configuration directory, e.g. `~/.config/activity-board`.
#[must_use]
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Path of the configuration file read when `--config` is not given.
#[must_use]
pub fn default_config_file() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths on systems without a home
/// directory, are returned unchanged.
///
/// # Examples
///
/// ```
/// use activity_board::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };

    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/themes/x.toml"), home.join("themes/x.toml"));
        }
        assert_eq!(expand_tilde("themes/~x.toml"), PathBuf::from("themes/~x.toml"));
    }

    #[test]
    fn config_file_lives_in_app_dir() {
        if let Some(file) = default_config_file() {
            assert!(file.ends_with("activity-board/config.toml"));
        }
    }
}

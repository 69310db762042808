// src/infra/paths.rs — XDG-compliant path management
//
// All paths respect the FRONTDESK_HOME environment variable for isolation.
// When FRONTDESK_HOME is set, config and data live under that directory.
// When unset, config uses ~/.frontdesk/ and data uses XDG_DATA_HOME/frontdesk.

use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

/// Returns the FRONTDESK_HOME override, if set.
fn frontdesk_home() -> Option<PathBuf> {
    std::env::var_os("FRONTDESK_HOME").map(PathBuf::from)
}

/// Home directory, falling back to the working directory on exotic platforms.
pub fn dirs_home() -> PathBuf {
    BaseDirs::new()
        .map(|b| b.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Configuration directory: $FRONTDESK_HOME/ or ~/.frontdesk/
pub fn config_dir() -> PathBuf {
    if let Some(home) = frontdesk_home() {
        return home;
    }
    dirs_home().join(".frontdesk")
}

/// Data directory: $FRONTDESK_HOME/data/ or ~/.local/share/frontdesk/
pub fn data_dir() -> PathBuf {
    if let Some(home) = frontdesk_home() {
        return home.join("data");
    }
    ProjectDirs::from("", "", "frontdesk")
        .map(|p| p.data_local_dir().to_path_buf())
        .unwrap_or_else(|| config_dir().join("data"))
}

/// Config file path
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Default log file for the terminal UI
pub fn log_file_path() -> PathBuf {
    data_dir().join("frontdesk.log")
}

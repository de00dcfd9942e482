use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    /// Default location of the log file when `--log-file` is given without a path.
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("focusclock");
            Some(state_dir.join("focusclock.log"))
        } else {
            ProjectDirs::from("", "", "focusclock")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("focusclock.log"))
        }
    }
}

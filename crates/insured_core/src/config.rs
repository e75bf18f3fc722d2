//! Process configuration.
//!
//! # Responsibility
//! - Resolve the fixed storage and log locations for one run.
//!
//! # Invariants
//! - No flags or environment variables are consulted.
//! - `log_dir` is absolute whenever the base directory is.

use crate::logging::default_log_level;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the stored roster.
pub const DATA_FILE_NAME: &str = "database.json";
/// Directory name for rolling log files.
pub const LOG_DIR_NAME: &str = "logs";

/// Locations and log level for one run of the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: &'static str,
}

impl AppConfig {
    /// Builds the configuration rooted at `dir`.
    pub fn from_working_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            data_file: dir.join(DATA_FILE_NAME),
            log_dir: dir.join(LOG_DIR_NAME),
            log_level: default_log_level(),
        }
    }

    /// Builds the configuration rooted at the process working directory.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::from_working_dir(std::env::current_dir()?))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, DATA_FILE_NAME, LOG_DIR_NAME};
    use std::path::Path;

    #[test]
    fn paths_are_rooted_at_working_dir() {
        let config = AppConfig::from_working_dir("/srv/registry");
        assert_eq!(
            config.data_file,
            Path::new("/srv/registry").join(DATA_FILE_NAME)
        );
        assert_eq!(config.log_dir, Path::new("/srv/registry").join(LOG_DIR_NAME));
        assert!(config.log_dir.is_absolute());
    }
}

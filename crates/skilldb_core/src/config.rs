//! Record store configuration.
//!
//! Values come from the caller (the CLI maps flags onto this struct); no
//! environment variables are read.

use crate::db::DEFAULT_BUSY_TIMEOUT;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DB_FILE_NAME: &str = "employee_data.db";
pub const DEFAULT_RESUME_DIR: &str = "resumes";

/// Locations and connection settings for one record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// SQLite database file.
    pub db_path: PathBuf,
    /// Directory where résumé uploads are written.
    pub resume_dir: PathBuf,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl StoreConfig {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            ..Self::default()
        }
    }

    pub fn with_resume_dir(mut self, resume_dir: impl Into<PathBuf>) -> Self {
        self.resume_dir = resume_dir.into();
        self
    }

    pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
        self.busy_timeout = busy_timeout;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            resume_dir: PathBuf::from(DEFAULT_RESUME_DIR),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StoreConfig;
    use std::path::Path;
    use std::time::Duration;

    #[test]
    fn defaults_match_legacy_layout() {
        let config = StoreConfig::default();
        assert_eq!(config.db_path, Path::new("employee_data.db"));
        assert_eq!(config.resume_dir, Path::new("resumes"));
        assert_eq!(config.busy_timeout, Duration::from_secs(5));
    }

    #[test]
    fn builders_override_fields() {
        let config = StoreConfig::new("/tmp/x.db")
            .with_resume_dir("/tmp/cv")
            .with_busy_timeout(Duration::from_millis(250));
        assert_eq!(config.db_path, Path::new("/tmp/x.db"));
        assert_eq!(config.resume_dir, Path::new("/tmp/cv"));
        assert_eq!(config.busy_timeout, Duration::from_millis(250));
    }
}

//! Connection configuration for sql-drill.
//!
//! Holds the credentials used for every query execution and the
//! file-backed store they persist to. The engine reads the config once
//! per query; there is no pooling, so a settings change takes effect on
//! the next execution.

use crate::error::{QuizError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;
use url::Url;

/// Database connection configuration.
///
/// The DSN uses the `host:port/database` shape the original quiz corpus
/// was authored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Database user.
    pub username: String,

    /// Database password.
    pub password: String,

    /// Data source name, `host:port/database`.
    pub dsn: String,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            username: "username".to_string(),
            password: "password".to_string(),
            dsn: "localhost:5432/postgres".to_string(),
        }
    }
}

impl ConnectionConfig {
    /// Assembles and validates the `postgres://` connection URL.
    pub fn url(&self) -> Result<Url> {
        let conn_str = format!("postgres://{}:{}@{}", self.username, self.password, self.dsn);
        Url::parse(&conn_str)
            .map_err(|e| QuizError::connection(format!("Invalid DSN '{}': {e}", self.dsn)))
    }

    /// Returns a display-safe string (no password) for UI purposes.
    pub fn display_string(&self) -> String {
        format!("{} @ {}", self.username, self.dsn)
    }
}

/// File-backed store for the connection settings.
///
/// Absent or corrupt files fall back to defaults, which are written back
/// so the user has a template to edit.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Creates a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default settings path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("sql-drill")
            .join("connection.json")
    }

    /// Returns the path this store writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the connection settings, falling back to defaults when the
    /// file is missing or unreadable. Defaults are written back; a
    /// failed write-back is only a warning since the session can run on
    /// the in-memory copy.
    pub fn load_or_init(&self) -> ConnectionConfig {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Corrupt connection settings at {}: {e}; using defaults",
                        self.path.display()
                    );
                    self.write_back_defaults()
                }
            },
            Err(_) => self.write_back_defaults(),
        }
    }

    /// Overwrites the stored settings.
    pub fn save(&self, config: &ConnectionConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                QuizError::persistence(format!(
                    "Failed to create settings directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let content = serde_json::to_string_pretty(config)
            .map_err(|e| QuizError::persistence(format!("Failed to encode settings: {e}")))?;

        std::fs::write(&self.path, content).map_err(|e| {
            QuizError::persistence(format!(
                "Failed to write settings to {}: {e}",
                self.path.display()
            ))
        })
    }

    fn write_back_defaults(&self) -> ConnectionConfig {
        let defaults = ConnectionConfig::default();
        if let Err(e) = self.save(&defaults) {
            warn!("Could not write default connection settings: {e}");
        }
        defaults
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_url_from_dsn() {
        let config = ConnectionConfig {
            username: "quiz".to_string(),
            password: "secret".to_string(),
            dsn: "db.example.com:5432/training".to_string(),
        };

        let url = config.url().unwrap();
        assert_eq!(url.scheme(), "postgres");
        assert_eq!(url.host_str(), Some("db.example.com"));
        assert_eq!(url.port(), Some(5432));
        assert_eq!(url.path(), "/training");
        assert_eq!(url.username(), "quiz");
        assert_eq!(url.password(), Some("secret"));
    }

    #[test]
    fn test_url_rejects_garbage_dsn() {
        let config = ConnectionConfig {
            username: "quiz".to_string(),
            password: "secret".to_string(),
            dsn: ":::".to_string(),
        };

        let err = config.url().unwrap_err();
        assert!(matches!(err, QuizError::Connection(_)));
    }

    #[test]
    fn test_display_string_hides_password() {
        let config = ConnectionConfig {
            username: "quiz".to_string(),
            password: "secret".to_string(),
            dsn: "localhost:5432/training".to_string(),
        };

        let display = config.display_string();
        assert_eq!(display, "quiz @ localhost:5432/training");
        assert!(!display.contains("secret"));
    }

    #[test]
    fn test_load_or_init_writes_defaults_when_missing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connection.json");
        let store = SettingsStore::new(&path);

        let config = store.load_or_init();
        assert_eq!(config, ConnectionConfig::default());
        assert!(path.exists());

        // A second load reads the file it just wrote.
        assert_eq!(store.load_or_init(), config);
    }

    #[test]
    fn test_load_or_init_recovers_from_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("connection.json");
        std::fs::write(&path, "{not json").unwrap();

        let store = SettingsStore::new(&path);
        let config = store.load_or_init();
        assert_eq!(config, ConnectionConfig::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("connection.json"));

        let config = ConnectionConfig {
            username: "student".to_string(),
            password: "pw".to_string(),
            dsn: "localhost:5433/exercises".to_string(),
        };
        store.save(&config).unwrap();

        assert_eq!(store.load_or_init(), config);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dirs").join("connection.json");
        let store = SettingsStore::new(&path);

        store.save(&ConnectionConfig::default()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_path_ends_with_connection_json() {
        let path = SettingsStore::default_path();
        assert!(path.ends_with("sql-drill/connection.json"));
    }
}

//! Application configuration
//!
//! Resolved once at startup from the platform paths Tauri provides.

use std::path::PathBuf;
use tauri::Manager;

const DB_FILE_NAME: &str = "tasks.db";
const LOG_LEVEL_ENV: &str = "TASKS_LOG";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    /// Resolve paths under the app data/log directories, creating them if needed
    pub fn resolve(app_handle: &tauri::AppHandle) -> Result<Self, String> {
        let data_dir = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| format!("Failed to resolve app data dir: {}", e))?;
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| format!("Failed to create {}: {}", data_dir.display(), e))?;

        let log_dir = app_handle
            .path()
            .app_log_dir()
            .map_err(|e| format!("Failed to resolve log dir: {}", e))?;

        Ok(Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir,
            log_level: log_level_from(std::env::var(LOG_LEVEL_ENV).ok().as_deref()),
        })
    }
}

/// Debug builds log at `debug`, release at `info`, unless overridden
fn log_level_from(value: Option<&str>) -> log::LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_override() {
        assert_eq!(log_level_from(Some("warn")), log::LevelFilter::Warn);
        assert_eq!(log_level_from(Some(" TRACE ")), log::LevelFilter::Trace);
    }

    #[test]
    fn test_log_level_default() {
        let expected = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        assert_eq!(log_level_from(None), expected);
        assert_eq!(log_level_from(Some("chatty")), expected);
    }
}

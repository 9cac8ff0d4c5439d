mod config;
pub mod database;

pub use config::{Config, DisplayConfig, LogConfig};
pub use database::SessionDb;

use std::path::PathBuf;

/// Returns the data directory, creating it if needed.
///
/// `STUDYPLAN_DATA_DIR` wins when set. Otherwise `~/.config/studyplan[-dev]/`
/// is used, with `STUDYPLAN_ENV=dev` selecting the development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, std::io::Error> {
    let dir = match std::env::var_os("STUDYPLAN_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("STUDYPLAN_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("studyplan-dev")
            } else {
                base_dir.join("studyplan")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

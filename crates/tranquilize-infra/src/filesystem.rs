//! Data directory layout for Tranquilize.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TRANQUILIZE_DATA_DIR";

/// Resolve the data directory: `$TRANQUILIZE_DATA_DIR`, else `~/.tranquilize`,
/// else `./.tranquilize`.
pub fn resolve_data_dir() -> PathBuf {
    data_dir_from(std::env::var(DATA_DIR_ENV).ok(), dirs::home_dir())
}

fn data_dir_from(env_dir: Option<String>, home: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = env_dir.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }

    // Use home directory fallback: ~/.tranquilize
    if let Some(home) = home {
        return home.join(".tranquilize");
    }

    // Last resort: current directory
    PathBuf::from(".tranquilize")
}

/// Path of the configuration file inside the data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

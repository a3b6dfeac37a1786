//! Path utilities for partyplanner.
//!
//! All data lives under `~/.partyplanner/`:
//! - `~/.partyplanner/config.toml` - main configuration
//! - `~/.partyplanner/partyplanner.db` - guest database

use std::path::PathBuf;

/// Returns the partyplanner home directory (`~/.partyplanner/`).
pub fn home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".partyplanner")
}

/// Returns the default config file path (`~/.partyplanner/config.toml`).
pub fn default_config() -> PathBuf {
    home_dir().join("config.toml")
}

/// Returns the default database path (`~/.partyplanner/partyplanner.db`).
pub fn default_database() -> PathBuf {
    home_dir().join("partyplanner.db")
}

/// Ensures the partyplanner home directory exists.
pub fn ensure_home_dir() -> std::io::Result<()> {
    std::fs::create_dir_all(home_dir())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_under_partyplanner_home() {
        let home = home_dir();
        let config = default_config();
        let db = default_database();

        assert!(home.to_string_lossy().contains(".partyplanner"));
        assert!(config.starts_with(&home));
        assert!(db.starts_with(&home));
    }
}

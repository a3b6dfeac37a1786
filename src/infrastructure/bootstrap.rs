//! Infrastructure bootstrap helpers for runtime wiring.

use std::path::Path;

use tracing::{debug, info};

use crate::adapter::outbound::sqlite::store::SqliteGuestStore;
use crate::application::guest::GuestService;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::paths;

/// Load configuration from an explicit path, the default path, or defaults.
///
/// An explicit path must exist. The default path is optional.
#[allow(clippy::result_large_err)]
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path);
    }

    let default_path = paths::default_config();
    if default_path.exists() {
        debug!(path = %default_path.display(), "loading default config");
        Config::load(default_path)
    } else {
        Config::from_env()
    }
}

/// Build the guest service over the configured SQLite store.
///
/// Creates `~/.partyplanner/` when the primary endpoint is the default one.
#[allow(clippy::result_large_err)]
pub fn build_guest_service(config: &Config) -> Result<GuestService<SqliteGuestStore>> {
    if Path::new(&config.store.primary) == paths::default_database() {
        paths::ensure_home_dir()?;
    }

    let store = SqliteGuestStore::new(config.store.clone())?;
    info!(
        primary = %config.store.primary,
        fallback = config.store.fallback.as_deref().unwrap_or("-"),
        table = %config.store.qualified_table(),
        "guest store configured"
    );
    Ok(GuestService::new(store))
}

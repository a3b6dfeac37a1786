#![allow(dead_code)]

use std::path::{Path, PathBuf};

use partyplanner::adapter::outbound::sqlite::store::SqliteGuestStore;
use partyplanner::application::guest::GuestService;
use partyplanner::domain::guest::GuestForm;
use partyplanner::infrastructure::config::store::StoreConfig;
use tempfile::TempDir;

/// Temporary SQLite database for integration tests.
///
/// The directory and everything in it is removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("partyplanner-{name}-"))
            .tempdir()
            .expect("create temp dir");
        let path = dir.path().join("guests.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> String {
        self.path.display().to_string()
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// An endpoint inside a directory that does not exist, so it cannot open.
    pub fn unreachable(&self) -> String {
        self.dir
            .path()
            .join("missing")
            .join("guests.db")
            .display()
            .to_string()
    }

    pub fn config(&self) -> StoreConfig {
        StoreConfig::with_primary(self.url())
    }

    /// Guest service over this database with the table created.
    pub fn service(&self) -> GuestService<SqliteGuestStore> {
        let store = SqliteGuestStore::new(self.config()).expect("valid store config");
        let service = GuestService::new(store);
        service.initialize().expect("create guest table");
        service
    }
}

pub fn form(first: &str, last: &str, member_type: &str, amount: &str, menu: &str) -> GuestForm {
    GuestForm {
        first_name: first.into(),
        last_name: last.into(),
        member_type: member_type.into(),
        amount_paid: amount.into(),
        menu_item: menu.into(),
    }
}

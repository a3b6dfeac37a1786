//! Database connection management using Diesel ORM.
//!
//! Connections are opened per call: the primary endpoint first, then the
//! fallback once. There is no pool, retry, or backoff.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, error, warn};

use crate::error::{Error, Result};
use crate::infrastructure::config::store::StoreConfig;

/// Open a connection to the primary endpoint, falling back once.
///
/// # Errors
/// Returns [`Error::Connection`] with both diagnostics when neither endpoint
/// can be opened.
pub fn connect(config: &StoreConfig) -> Result<SqliteConnection> {
    let primary_error = match open(&config.primary, config.busy_timeout_ms) {
        Ok(conn) => {
            debug!(endpoint = %config.primary, "connected to primary store");
            return Ok(conn);
        }
        Err(reason) => reason,
    };
    warn!(endpoint = %config.primary, error = %primary_error, "primary store unreachable");

    let Some(fallback) = config.fallback.as_deref() else {
        error!("no fallback store configured");
        return Err(Error::Connection {
            primary: primary_error,
            fallback: "not configured".to_string(),
        });
    };

    match open(fallback, config.busy_timeout_ms) {
        Ok(conn) => {
            warn!(endpoint = %fallback, "connected to fallback store");
            Ok(conn)
        }
        Err(reason) => {
            error!(endpoint = %fallback, error = %reason, "fallback store unreachable");
            Err(Error::Connection {
                primary: primary_error,
                fallback: reason,
            })
        }
    }
}

fn open(url: &str, busy_timeout_ms: u64) -> std::result::Result<SqliteConnection, String> {
    let mut conn = SqliteConnection::establish(url).map_err(|e| e.to_string())?;
    configure_sqlite_connection(&mut conn, busy_timeout_ms).map_err(|e| e.to_string())?;
    Ok(conn)
}

/// Configure SQLite connection pragmas.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    busy_timeout_ms: u64,
) -> QueryResult<()> {
    diesel::sql_query(format!("PRAGMA busy_timeout={busy_timeout_ms}")).execute(conn)?;
    Ok(())
}

/// `CREATE TABLE` statement for the guest table.
#[must_use]
pub fn create_table_sql(qualified_table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {qualified_table} (\
            party_id INTEGER PRIMARY KEY AUTOINCREMENT, \
            f_name TEXT NOT NULL, \
            l_name TEXT NOT NULL, \
            member_type TEXT NOT NULL, \
            amt_paid TEXT NOT NULL DEFAULT '0.00', \
            menu_item TEXT NOT NULL\
        )"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn db_path(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    fn unreachable_path(dir: &TempDir) -> String {
        dir.path()
            .join("missing")
            .join("nested")
            .join("guests.db")
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn connects_to_primary() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::with_primary(db_path(&dir, "primary.db"));
        assert!(connect(&config).is_ok());
        assert!(dir.path().join("primary.db").exists());
    }

    #[test]
    fn falls_back_when_primary_unreachable() {
        let dir = TempDir::new().unwrap();
        let config =
            StoreConfig::with_primary(unreachable_path(&dir)).fallback(db_path(&dir, "fallback.db"));
        assert!(connect(&config).is_ok());
        assert!(dir.path().join("fallback.db").exists());
    }

    #[test]
    fn fallback_not_used_when_primary_works() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::with_primary(db_path(&dir, "primary.db"))
            .fallback(db_path(&dir, "fallback.db"));
        connect(&config).unwrap();
        assert!(!dir.path().join("fallback.db").exists());
    }

    #[test]
    fn both_endpoints_unreachable_is_connection_error() {
        let dir = TempDir::new().unwrap();
        let config =
            StoreConfig::with_primary(unreachable_path(&dir)).fallback(unreachable_path(&dir));
        assert!(matches!(connect(&config), Err(Error::Connection { .. })));
    }

    #[test]
    fn missing_fallback_reports_not_configured() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::with_primary(unreachable_path(&dir));
        match connect(&config) {
            Err(Error::Connection { fallback, .. }) => assert_eq!(fallback, "not configured"),
            Err(other) => panic!("expected connection error, got {other:?}"),
            Ok(_) => panic!("expected connection error"),
        }
    }

    #[test]
    fn create_table_sql_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::with_primary(db_path(&dir, "guests.db"));
        let mut conn = connect(&config).unwrap();
        let sql = create_table_sql(&config.qualified_table());
        diesel::sql_query(&sql).execute(&mut conn).unwrap();
        diesel::sql_query(&sql).execute(&mut conn).unwrap();
    }
}

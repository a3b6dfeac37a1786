//! SQLite guest store implementation.
//!
//! Provides persistent storage for guest rows using SQLite and Diesel ORM.
//! The table name comes from configuration, so statements are built with
//! `sql_query` and bound parameters rather than the `table!` DSL.

use diesel::prelude::*;
use diesel::query_builder::{BoxedSqlQuery, SqlQuery};
use diesel::sql_types::{BigInt, Text};
use diesel::sqlite::Sqlite;
use diesel::SqliteConnection;
use tracing::{debug, info, warn};

use crate::adapter::outbound::sqlite::database::connection::{connect, create_table_sql};
use crate::adapter::outbound::sqlite::database::model::{GuestRow, InsertedId, GUEST_COLUMNS};
use crate::domain::field::GuestPatch;
use crate::domain::guest::{GuestId, GuestRecord, NewGuest};
use crate::error::{Error, Result};
use crate::infrastructure::config::store::StoreConfig;
use crate::port::outbound::store::GuestStore;

/// SQLite-backed guest store.
///
/// Implements the [`GuestStore`] trait. Holds only its configuration; every
/// operation opens a connection and drops it before returning.
#[derive(Debug, Clone)]
pub struct SqliteGuestStore {
    config: StoreConfig,
    table: String,
}

impl SqliteGuestStore {
    /// Create a store for the given endpoints.
    ///
    /// # Errors
    /// Returns a config error if the endpoints or identifiers are invalid.
    pub fn new(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let table = config.qualified_table();
        Ok(Self { config, table })
    }

    #[must_use]
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn connect(&self) -> Result<SqliteConnection> {
        connect(&self.config)
    }
}

fn write_error(operation: &'static str, error: diesel::result::Error) -> Error {
    warn!(operation, error = %error, "store write failed");
    Error::Write(error.to_string())
}

fn read_error(operation: &'static str, error: diesel::result::Error) -> Error {
    warn!(operation, error = %error, "store read failed");
    Error::Read(error.to_string())
}

impl GuestStore for SqliteGuestStore {
    fn ensure_table(&self) -> Result<()> {
        let mut conn = self.connect()?;
        diesel::sql_query(create_table_sql(&self.table))
            .execute(&mut conn)
            .map_err(|e| write_error("ensure_table", e))?;
        info!(table = %self.table, "guest table ready");
        Ok(())
    }

    fn create(&self, guest: &NewGuest) -> Result<GuestId> {
        let sql = format!(
            "INSERT INTO {} (f_name, l_name, member_type, amt_paid, menu_item) \
             VALUES (?, ?, ?, ?, ?) RETURNING party_id",
            self.table
        );
        let mut conn = self.connect()?;

        let inserted: Vec<InsertedId> = conn
            .transaction(|conn| {
                diesel::sql_query(sql.as_str())
                    .bind::<Text, _>(&guest.first_name)
                    .bind::<Text, _>(&guest.last_name)
                    .bind::<Text, _>(guest.member_type.label())
                    .bind::<Text, _>(guest.amount_paid.to_string())
                    .bind::<Text, _>(guest.menu_item.label())
                    .load(conn)
            })
            .map_err(|e| write_error("create", e))?;

        let id = inserted
            .first()
            .map(|row| GuestId::new(row.party_id))
            .ok_or_else(|| Error::Write("insert returned no id".to_string()))?;

        info!(guest_id = %id, "guest added");
        Ok(id)
    }

    fn update(&self, id: GuestId, patch: &GuestPatch) -> Result<()> {
        if patch.is_empty() {
            debug!(guest_id = %id, "no data provided to modify the guest");
            return Err(Error::NoOp);
        }

        let assignments = patch.assignments();
        let set_clause = assignments
            .iter()
            .map(|(field, _)| format!("{} = ?", field.column()))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("UPDATE {} SET {set_clause} WHERE party_id = ?", self.table);
        let mut conn = self.connect()?;

        let updated = conn
            .transaction(|conn| {
                let mut query: BoxedSqlQuery<'_, Sqlite, SqlQuery> =
                    diesel::sql_query(sql.as_str()).into_boxed();
                for (_, value) in &assignments {
                    query = query.bind::<Text, _>(value.clone());
                }
                query.bind::<BigInt, _>(id.get()).execute(conn)
            })
            .map_err(|e| write_error("update", e))?;

        if updated == 0 {
            debug!(guest_id = %id, "no guest matched the update");
            return Err(Error::NotFound(id));
        }

        let fields: Vec<&str> = assignments.iter().map(|(field, _)| field.column()).collect();
        info!(guest_id = %id, fields = ?fields, "guest modified");
        Ok(())
    }

    fn delete(&self, id: GuestId) -> Result<()> {
        let sql = format!("DELETE FROM {} WHERE party_id = ?", self.table);
        let mut conn = self.connect()?;

        let deleted = conn
            .transaction(|conn| {
                diesel::sql_query(sql.as_str())
                    .bind::<BigInt, _>(id.get())
                    .execute(conn)
            })
            .map_err(|e| write_error("delete", e))?;

        if deleted == 0 {
            debug!(guest_id = %id, "no guest matched the delete");
        } else {
            info!(guest_id = %id, "guest deleted");
        }
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<GuestRecord>> {
        let sql = format!("SELECT {GUEST_COLUMNS} FROM {} ORDER BY party_id", self.table);
        let mut conn = self.connect()?;

        let rows: Vec<GuestRow> = diesel::sql_query(sql)
            .load(&mut conn)
            .map_err(|e| read_error("list_all", e))?;

        debug!(count = rows.len(), "guests listed");
        rows.into_iter().map(GuestRecord::try_from).collect()
    }

    fn find(&self, id: GuestId) -> Result<Option<GuestRecord>> {
        let sql = format!("SELECT {GUEST_COLUMNS} FROM {} WHERE party_id = ?", self.table);
        let mut conn = self.connect()?;

        let row: Option<GuestRow> = diesel::sql_query(sql)
            .bind::<BigInt, _>(id.get())
            .get_result(&mut conn)
            .optional()
            .map_err(|e| read_error("find", e))?;

        row.map(GuestRecord::try_from).transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberType;
    use crate::domain::menu::MenuItem;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn setup_test_store() -> (TempDir, SqliteGuestStore) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("guests.db");
        let store =
            SqliteGuestStore::new(StoreConfig::with_primary(path.to_string_lossy())).unwrap();
        store.ensure_table().unwrap();
        (dir, store)
    }

    fn guest(first: &str, member_type: MemberType, menu_item: MenuItem) -> NewGuest {
        NewGuest::try_new(first, "Tester", member_type, dec!(10), menu_item).unwrap()
    }

    #[test]
    fn create_then_find_returns_same_fields() {
        let (_dir, store) = setup_test_store();
        let new = guest("Ada", MemberType::Member, MenuItem::Fish);

        let id = store.create(&new).unwrap();
        let found = store.find(id).unwrap().unwrap();

        assert_eq!(found, new.into_record(id));
        assert_eq!(found.amount_paid.to_string(), "10.00");
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let (_dir, store) = setup_test_store();
        let first = store
            .create(&guest("A", MemberType::Guest, MenuItem::Beef))
            .unwrap();
        store.delete(first).unwrap();
        let second = store
            .create(&guest("B", MemberType::Guest, MenuItem::Beef))
            .unwrap();
        assert!(second > first);
    }

    #[test]
    fn empty_patch_is_noop() {
        let (_dir, store) = setup_test_store();
        let id = store
            .create(&guest("A", MemberType::Guest, MenuItem::Beef))
            .unwrap();
        assert!(matches!(
            store.update(id, &GuestPatch::default()),
            Err(Error::NoOp)
        ));
    }

    #[test]
    fn empty_patch_does_not_connect() {
        let dir = TempDir::new().unwrap();
        let unreachable = dir.path().join("missing").join("guests.db");
        let store =
            SqliteGuestStore::new(StoreConfig::with_primary(unreachable.to_string_lossy()))
                .unwrap();
        assert!(matches!(
            store.update(GuestId::new(1), &GuestPatch::default()),
            Err(Error::NoOp)
        ));
    }

    #[test]
    fn update_of_missing_guest_is_not_found() {
        let (_dir, store) = setup_test_store();
        let patch = GuestPatch {
            first_name: Some("Nobody".into()),
            ..GuestPatch::default()
        };
        assert!(matches!(
            store.update(GuestId::new(99), &patch),
            Err(Error::NotFound(id)) if id == GuestId::new(99)
        ));
    }

    #[test]
    fn multi_field_update_replaces_only_given_fields() {
        let (_dir, store) = setup_test_store();
        let id = store
            .create(&guest("A", MemberType::Guest, MenuItem::Beef))
            .unwrap();
        let patch = GuestPatch {
            member_type: Some(MemberType::Usher),
            amount_paid: Some(dec!(0.00)),
            ..GuestPatch::default()
        };

        store.update(id, &patch).unwrap();
        let found = store.find(id).unwrap().unwrap();

        assert_eq!(found.first_name, "A");
        assert_eq!(found.member_type.known(), Some(MemberType::Usher));
        assert_eq!(found.amount_paid, dec!(0.00));
        assert_eq!(found.menu_item.known(), Some(MenuItem::Beef));
    }

    #[test]
    fn delete_missing_guest_succeeds() {
        let (_dir, store) = setup_test_store();
        assert!(store.delete(GuestId::new(404)).is_ok());
    }

    #[test]
    fn list_all_is_in_insertion_order() {
        let (_dir, store) = setup_test_store();
        let ids: Vec<_> = ["A", "B", "C"]
            .iter()
            .map(|name| {
                store
                    .create(&guest(name, MemberType::Guest, MenuItem::Pasta))
                    .unwrap()
            })
            .collect();

        let listed: Vec<_> = store.list_all().unwrap().iter().map(|g| g.id).collect();
        assert_eq!(listed, ids);
    }

    #[test]
    fn foreign_labels_are_listed_as_unknown() {
        let (_dir, store) = setup_test_store();
        let mut conn = store.connect().unwrap();
        diesel::sql_query(format!(
            "INSERT INTO {} (f_name, l_name, member_type, amt_paid, menu_item) \
             VALUES ('X', 'Y', 'Roadie', '5.00', 'LOBSTER')",
            store.table
        ))
        .execute(&mut conn)
        .unwrap();
        drop(conn);

        let listed = store.list_all().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].member_type.to_string(), "Roadie");
        assert_eq!(listed[0].menu_item.known(), None);
    }

    #[test]
    fn inexact_labels_are_read_verbatim() {
        let (_dir, store) = setup_test_store();
        let mut conn = store.connect().unwrap();
        diesel::sql_query(format!(
            "INSERT INTO {} (f_name, l_name, member_type, amt_paid, menu_item) \
             VALUES ('X', 'Y', 'keynote-speaker', '0.00', 'vegan')",
            store.table
        ))
        .execute(&mut conn)
        .unwrap();
        drop(conn);

        let listed = store.list_all().unwrap();
        assert_eq!(listed[0].member_type.known(), None);
        assert_eq!(listed[0].member_type.to_string(), "keynote-speaker");
        assert_eq!(listed[0].menu_item.to_string(), "vegan");
    }

    #[test]
    fn custom_table_name_is_used() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig {
            table: "gala_guests".into(),
            ..StoreConfig::with_primary(dir.path().join("g.db").to_string_lossy())
        };
        let store = SqliteGuestStore::new(config).unwrap();
        store.ensure_table().unwrap();
        store
            .create(&guest("A", MemberType::Waiter, MenuItem::Vegan))
            .unwrap();
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn missing_table_is_read_error() {
        let dir = TempDir::new().unwrap();
        let store = SqliteGuestStore::new(StoreConfig::with_primary(
            dir.path().join("empty.db").to_string_lossy(),
        ))
        .unwrap();
        assert!(matches!(store.list_all(), Err(Error::Read(_))));
        assert!(matches!(
            store.create(&guest("A", MemberType::Guest, MenuItem::Beef)),
            Err(Error::Write(_))
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = StoreConfig {
            table: "no spaces".into(),
            ..StoreConfig::with_primary("x.db")
        };
        assert!(matches!(
            SqliteGuestStore::new(config),
            Err(Error::Config(_))
        ));
    }
}

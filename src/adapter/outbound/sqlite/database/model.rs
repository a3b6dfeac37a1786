//! Database row types for Diesel ORM.

use std::str::FromStr;

use diesel::sql_types::{BigInt, Text};
use diesel::QueryableByName;
use rust_decimal::Decimal;

use crate::domain::guest::{GuestId, GuestRecord, StoredValue};
use crate::error::{Error, Result};

/// Column list shared by every select.
pub const GUEST_COLUMNS: &str = "party_id, f_name, l_name, member_type, amt_paid, menu_item";

/// Database row for a guest (queryable).
#[derive(QueryableByName, Debug, Clone)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GuestRow {
    #[diesel(sql_type = BigInt)]
    pub party_id: i64,
    #[diesel(sql_type = Text)]
    pub f_name: String,
    #[diesel(sql_type = Text)]
    pub l_name: String,
    #[diesel(sql_type = Text)]
    pub member_type: String,
    #[diesel(sql_type = Text)]
    pub amt_paid: String,
    #[diesel(sql_type = Text)]
    pub menu_item: String,
}

impl TryFrom<GuestRow> for GuestRecord {
    type Error = Error;

    fn try_from(row: GuestRow) -> Result<Self> {
        let amount_paid = Decimal::from_str(row.amt_paid.trim()).map_err(|e| {
            Error::Read(format!(
                "guest {} has unreadable amount '{}': {e}",
                row.party_id, row.amt_paid
            ))
        })?;

        Ok(GuestRecord {
            id: GuestId::new(row.party_id),
            first_name: row.f_name,
            last_name: row.l_name,
            member_type: StoredValue::from_stored(row.member_type),
            amount_paid,
            menu_item: StoredValue::from_stored(row.menu_item),
        })
    }
}

/// Id returned by `INSERT ... RETURNING`.
#[derive(QueryableByName, Debug, Clone, Copy)]
pub struct InsertedId {
    #[diesel(sql_type = BigInt)]
    pub party_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::member::MemberType;
    use rust_decimal_macros::dec;

    fn row() -> GuestRow {
        GuestRow {
            party_id: 3,
            f_name: "Grace".into(),
            l_name: "Hopper".into(),
            member_type: "Member".into(),
            amt_paid: "20.00".into(),
            menu_item: "SOUP".into(),
        }
    }

    #[test]
    fn row_converts_to_record() {
        let record = GuestRecord::try_from(row()).unwrap();
        assert_eq!(record.id, GuestId::new(3));
        assert_eq!(record.member_type, StoredValue::Known(MemberType::Member));
        assert_eq!(record.amount_paid, dec!(20.00));
        assert_eq!(record.menu_item, StoredValue::Unknown("SOUP".into()));
    }

    #[test]
    fn unreadable_amount_is_read_error() {
        let bad = GuestRow {
            amt_paid: "n/a".into(),
            ..row()
        };
        assert!(matches!(GuestRecord::try_from(bad), Err(Error::Read(_))));
    }
}

//! Guest records and their validated input shapes.

use std::fmt;

use serde::{Serialize, Serializer};

use super::error::ValidationError;
use super::member::MemberType;
use super::menu::MenuItem;
use super::money::{normalize_amount, parse_amount, Amount};

/// Store-assigned identifier of a guest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GuestId(i64);

impl GuestId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for GuestId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// A category value as read back from the store.
///
/// Rows written by other tools may hold labels outside the closed sets;
/// those are kept verbatim instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue<T> {
    Known(T),
    Unknown(String),
}

/// A closed category persisted as one exact label per value.
pub trait StoredLabel: Copy + 'static {
    /// Every value of the category.
    const VARIANTS: &'static [Self];

    /// The exact text written to the store.
    fn stored_label(self) -> &'static str;
}

impl<T: StoredLabel> StoredValue<T> {
    /// Interpret a stored label.
    ///
    /// Only the exact canonical label is recognised. Input parsing is
    /// lenient, but stored text that differs in case or spelling is kept
    /// verbatim as [`StoredValue::Unknown`].
    pub fn from_stored(raw: String) -> Self {
        match T::VARIANTS
            .iter()
            .copied()
            .find(|value| value.stored_label() == raw)
        {
            Some(value) => Self::Known(value),
            None => Self::Unknown(raw),
        }
    }
}

impl<T: Copy> StoredValue<T> {
    /// The recognised value, if any.
    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unknown(_) => None,
        }
    }
}

impl<T> From<T> for StoredValue<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: fmt::Display> fmt::Display for StoredValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(value) => value.fmt(f),
            Self::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl<T: fmt::Display> Serialize for StoredValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One attendee row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuestRecord {
    pub id: GuestId,
    pub first_name: String,
    pub last_name: String,
    pub member_type: StoredValue<MemberType>,
    pub amount_paid: Amount,
    pub menu_item: StoredValue<MenuItem>,
}

impl GuestRecord {
    /// First and last name joined by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A validated guest that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGuest {
    pub first_name: String,
    pub last_name: String,
    pub member_type: MemberType,
    pub amount_paid: Amount,
    pub menu_item: MenuItem,
}

impl NewGuest {
    /// Build a guest from typed parts, enforcing the field rules.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for empty names or an invalid amount.
    pub fn try_new(
        first_name: &str,
        last_name: &str,
        member_type: MemberType,
        amount_paid: Amount,
        menu_item: MenuItem,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: required_name(first_name, "first_name")?,
            last_name: required_name(last_name, "last_name")?,
            member_type,
            amount_paid: normalize_amount(amount_paid)?,
            menu_item,
        })
    }

    /// Attach the id the store assigned.
    #[must_use]
    pub fn into_record(self, id: GuestId) -> GuestRecord {
        GuestRecord {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            member_type: self.member_type.into(),
            amount_paid: self.amount_paid,
            menu_item: self.menu_item.into(),
        }
    }
}

/// Raw guest input as a front end collects it.
#[derive(Debug, Clone, Default)]
pub struct GuestForm {
    pub first_name: String,
    pub last_name: String,
    pub member_type: String,
    pub amount_paid: String,
    pub menu_item: String,
}

impl GuestForm {
    /// Coerce the form into a [`NewGuest`].
    ///
    /// An empty amount is taken as nothing paid.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn validate(&self) -> Result<NewGuest, ValidationError> {
        let first_name = required_name(&self.first_name, "first_name")?;
        let last_name = required_name(&self.last_name, "last_name")?;
        if self.member_type.trim().is_empty() {
            return Err(ValidationError::MissingField {
                field: "member_type",
            });
        }
        let member_type = self.member_type.parse::<MemberType>()?;
        let amount_paid = parse_amount(&self.amount_paid)?;
        if self.menu_item.trim().is_empty() {
            return Err(ValidationError::MissingField { field: "menu_item" });
        }
        let menu_item = self.menu_item.parse::<MenuItem>()?;

        Ok(NewGuest {
            first_name,
            last_name,
            member_type,
            amount_paid,
            menu_item,
        })
    }
}

pub(crate) fn required_name(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField { field });
    }
    Ok(trimmed.to_string())
}

//! Updatable guest fields and partial updates.

use std::fmt;
use std::str::FromStr;

use super::error::ValidationError;
use super::guest::required_name;
use super::member::MemberType;
use super::menu::MenuItem;
use super::money::{normalize_amount, parse_amount, Amount};

/// A guest field that can be modified after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuestField {
    FirstName,
    LastName,
    MemberType,
    AmountPaid,
    MenuItem,
}

impl GuestField {
    /// Every updatable field, in column order.
    pub const ALL: [GuestField; 5] = [
        GuestField::FirstName,
        GuestField::LastName,
        GuestField::MemberType,
        GuestField::AmountPaid,
        GuestField::MenuItem,
    ];

    /// Label shown to people editing a guest.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::MemberType => "Guest Type",
            Self::AmountPaid => "Amount Paid",
            Self::MenuItem => "Menu Item",
        }
    }

    /// Column the field is stored in.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::FirstName => "f_name",
            Self::LastName => "l_name",
            Self::MemberType => "member_type",
            Self::AmountPaid => "amt_paid",
            Self::MenuItem => "menu_item",
        }
    }

    const fn slug(self) -> &'static str {
        match self {
            Self::FirstName => "first-name",
            Self::LastName => "last-name",
            Self::MemberType => "member-type",
            Self::AmountPaid => "amount-paid",
            Self::MenuItem => "menu-item",
        }
    }
}

impl fmt::Display for GuestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GuestField {
    type Err = ValidationError;

    /// Accepts the label, the column name, or a kebab-case name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let kebab = wanted.to_ascii_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .into_iter()
            .find(|field| {
                field.label().eq_ignore_ascii_case(wanted)
                    || field.column() == wanted
                    || field.slug() == kebab
            })
            .ok_or_else(|| ValidationError::UnknownField(wanted.to_string()))
    }
}

/// A set of field replacements for one guest.
///
/// Fields left as `None` are not touched by an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GuestPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub member_type: Option<MemberType>,
    pub amount_paid: Option<Amount>,
    pub menu_item: Option<MenuItem>,
}

impl GuestPatch {
    /// A patch replacing a single field, parsed from raw input.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] if the value is not valid for the field.
    pub fn single(field: GuestField, value: &str) -> Result<Self, ValidationError> {
        let mut patch = Self::default();
        match field {
            GuestField::FirstName => {
                patch.first_name = Some(required_name(value, "first_name")?);
            }
            GuestField::LastName => {
                patch.last_name = Some(required_name(value, "last_name")?);
            }
            GuestField::MemberType => patch.member_type = Some(value.parse()?),
            GuestField::AmountPaid => patch.amount_paid = Some(parse_amount(value)?),
            GuestField::MenuItem => patch.menu_item = Some(value.parse()?),
        }
        Ok(patch)
    }

    /// Check names and amount of a hand-built patch.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] for empty names or an invalid amount.
    pub fn validated(self) -> Result<Self, ValidationError> {
        Ok(Self {
            first_name: self
                .first_name
                .map(|name| required_name(&name, "first_name"))
                .transpose()?,
            last_name: self
                .last_name
                .map(|name| required_name(&name, "last_name"))
                .transpose()?,
            amount_paid: self.amount_paid.map(normalize_amount).transpose()?,
            ..self
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.member_type.is_none()
            && self.amount_paid.is_none()
            && self.menu_item.is_none()
    }

    /// Provided fields with their stored text, in column order.
    #[must_use]
    pub fn assignments(&self) -> Vec<(GuestField, String)> {
        let mut out = Vec::new();
        if let Some(name) = &self.first_name {
            out.push((GuestField::FirstName, name.clone()));
        }
        if let Some(name) = &self.last_name {
            out.push((GuestField::LastName, name.clone()));
        }
        if let Some(kind) = self.member_type {
            out.push((GuestField::MemberType, kind.label().to_string()));
        }
        if let Some(amount) = self.amount_paid {
            out.push((GuestField::AmountPaid, amount.to_string()));
        }
        if let Some(item) = self.menu_item {
            out.push((GuestField::MenuItem, item.label().to_string()));
        }
        out
    }
}

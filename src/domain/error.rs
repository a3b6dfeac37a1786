//! Domain validation errors for guest input.
//!
//! This module defines errors that occur when a guest's fields violate the
//! registry's rules. They are returned by [`GuestForm::validate`] and by the
//! patch builders before anything reaches the store.
//!
//! # Examples
//!
//! ```
//! use partyplanner::domain::error::ValidationError;
//! use partyplanner::domain::guest::GuestForm;
//!
//! let form = GuestForm {
//!     first_name: "Ada".into(),
//!     last_name: "".into(),
//!     member_type: "Guest".into(),
//!     amount_paid: "".into(),
//!     menu_item: "BEEF".into(),
//! };
//!
//! assert!(matches!(
//!     form.validate(),
//!     Err(ValidationError::MissingField { field: "last_name" })
//! ));
//! ```
//!
//! [`GuestForm::validate`]: crate::domain::guest::GuestForm::validate

use thiserror::Error;

/// Errors raised when guest input is missing or malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field was empty after trimming.
    #[error("{field} is required")]
    MissingField {
        /// Name of the empty field.
        field: &'static str,
    },

    /// The member type is not one of the known categories.
    #[error("unknown member type '{0}'")]
    UnknownMemberType(String),

    /// The menu item is not one of the known meals.
    #[error("unknown menu item '{0}'")]
    UnknownMenuItem(String),

    /// The amount could not be read as a number.
    #[error("amount paid must be a valid number, got '{0}'")]
    InvalidAmount(String),

    /// The amount was below zero.
    #[error("amount paid must not be negative, got {0}")]
    NegativeAmount(rust_decimal::Decimal),

    /// The amount had more precision than whole cents.
    #[error("amount paid must have at most two decimal places, got {0}")]
    FractionalCents(rust_decimal::Decimal),

    /// The amount cannot be held with two fraction digits.
    #[error("amount paid is too large, got {0}")]
    AmountTooLarge(rust_decimal::Decimal),

    /// The field label did not name an updatable field.
    #[error("unknown field '{0}'")]
    UnknownField(String),
}

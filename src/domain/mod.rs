//! Guest registry domain types.
//!
//! Everything here is storage-agnostic: closed category sets, validated
//! guest input, partial updates, and fee arithmetic.

pub mod error;
pub mod field;
pub mod guest;
pub mod member;
pub mod menu;
pub mod money;

pub use error::ValidationError;
pub use field::{GuestField, GuestPatch};
pub use guest::{GuestForm, GuestId, GuestRecord, NewGuest, StoredLabel, StoredValue};
pub use member::MemberType;
pub use menu::MenuItem;
pub use money::{format_currency, parse_amount, Amount};

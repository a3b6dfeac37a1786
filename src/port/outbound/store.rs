//! Persistence port for guest records.

use crate::domain::field::GuestPatch;
use crate::domain::guest::{GuestId, GuestRecord, NewGuest};
use crate::error::Result;

/// Storage operations for guest rows.
///
/// Every call is self-contained: implementations acquire and release their
/// own connection, so no state is shared between calls.
pub trait GuestStore {
    /// Create the backing table if it does not exist yet.
    fn ensure_table(&self) -> Result<()>;

    /// Insert a guest and return the id the store assigned.
    fn create(&self, guest: &NewGuest) -> Result<GuestId>;

    /// Replace the provided fields of an existing guest.
    ///
    /// Returns [`Error::NoOp`] without touching the store when the patch is
    /// empty, and [`Error::NotFound`] when no row has the id.
    ///
    /// [`Error::NoOp`]: crate::error::Error::NoOp
    /// [`Error::NotFound`]: crate::error::Error::NotFound
    fn update(&self, id: GuestId, patch: &GuestPatch) -> Result<()>;

    /// Delete a guest. Deleting an unknown id also succeeds.
    fn delete(&self, id: GuestId) -> Result<()>;

    /// Every guest, in the store's natural order.
    fn list_all(&self) -> Result<Vec<GuestRecord>>;

    /// A single guest by id.
    fn find(&self, id: GuestId) -> Result<Option<GuestRecord>>;
}

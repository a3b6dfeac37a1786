//! Guest service: the facade front ends call.
//!
//! Validates call shapes, maps field labels to typed patches, and delegates
//! to a [`GuestStore`]. Holds no state beyond the store handle.

use tracing::{debug, warn};

use crate::domain::field::{GuestField, GuestPatch};
use crate::domain::guest::{GuestForm, GuestId, GuestRecord, NewGuest};
use crate::error::{Error, Result};
use crate::port::outbound::store::GuestStore;

/// Guest registry operations over a store.
#[derive(Debug, Clone)]
pub struct GuestService<S> {
    store: S,
}

impl<S: GuestStore> GuestService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create the guest table if it is missing.
    pub fn initialize(&self) -> Result<()> {
        self.store.ensure_table()
    }

    /// Validate raw input and add the guest.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] before touching the store when the form
    /// is malformed, otherwise any store error.
    pub fn add(&self, form: &GuestForm) -> Result<GuestId> {
        let guest = form.validate().map_err(|e| {
            warn!(error = %e, "rejected guest input");
            Error::from(e)
        })?;
        self.add_guest(&guest)
    }

    /// Add an already validated guest.
    pub fn add_guest(&self, guest: &NewGuest) -> Result<GuestId> {
        self.store.create(guest)
    }

    /// Replace a single field, parsing `new_value` for that field.
    ///
    /// # Errors
    /// Returns [`Error::Validation`] if the value does not fit the field.
    pub fn modify(&self, id: GuestId, field: GuestField, new_value: &str) -> Result<()> {
        let patch = GuestPatch::single(field, new_value).map_err(|e| {
            warn!(guest_id = %id, field = field.column(), error = %e, "rejected field value");
            Error::from(e)
        })?;
        debug!(guest_id = %id, field = field.column(), "modifying guest");
        self.store.update(id, &patch)
    }

    /// Replace every field the patch provides.
    ///
    /// # Errors
    /// Returns [`Error::NoOp`] for an empty patch.
    pub fn modify_fields(&self, id: GuestId, patch: GuestPatch) -> Result<()> {
        let patch = patch.validated()?;
        self.store.update(id, &patch)
    }

    pub fn delete(&self, id: GuestId) -> Result<()> {
        self.store.delete(id)
    }

    pub fn list(&self) -> Result<Vec<GuestRecord>> {
        self.store.list_all()
    }

    /// Look up one guest.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] when no guest has the id.
    pub fn details(&self, id: GuestId) -> Result<GuestRecord> {
        self.store.find(id)?.ok_or(Error::NotFound(id))
    }
}

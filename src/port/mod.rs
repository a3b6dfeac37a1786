//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!     ┌──────────────┐      ┌──────────────┐
//!     │ CLI adapter  │─────▶│ Application  │
//!     └──────────────┘      │ (service,    │
//!                           │  reports)    │
//!                           └──────┬───────┘
//!                                  │ GuestStore
//!                                  ▼
//!                           ┌──────────────┐
//!                           │ SQLite store │
//!                           └──────────────┘
//! ```

pub mod outbound;

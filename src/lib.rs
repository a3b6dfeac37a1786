//! Partyplanner - an event guest registry.
//!
//! Keeps one row per attendee (name, member type, amount paid, meal choice)
//! in a SQLite table and renders attendee and menu reports over the full list.
//!
//! # Architecture
//!
//! - [`domain`] - Guest records, closed category sets, money rules
//! - [`port`] - The [`port::outbound::store::GuestStore`] trait
//! - [`application`] - Guest service and report generator
//! - [`adapter`] - SQLite store (outbound) and the CLI (inbound)
//! - [`infrastructure`] - Configuration, logging, paths, wiring
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use partyplanner::adapter::outbound::sqlite::store::SqliteGuestStore;
//! use partyplanner::application::guest::GuestService;
//! use partyplanner::application::report::{ReportGenerator, ReportKind};
//! use partyplanner::domain::guest::GuestForm;
//! use partyplanner::infrastructure::config::store::StoreConfig;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = SqliteGuestStore::new(StoreConfig::with_primary("guests.db"))?;
//!     let guests = GuestService::new(store);
//!     guests.initialize()?;
//!     guests.add(&GuestForm {
//!         first_name: "Ada".into(),
//!         last_name: "Lovelace".into(),
//!         member_type: "Member".into(),
//!         amount_paid: "25".into(),
//!         menu_item: "FISH".into(),
//!     })?;
//!     println!("{}", ReportGenerator::new(&guests).generate(ReportKind::Menu)?);
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

//! SQLite persistence adapters.
//!
//! Provides the SQLite-backed guest store using Diesel ORM. Each store call
//! opens its own connection and drops it before returning.

pub mod database;
pub mod store;

//! SQLite database modules.
//!
//! Provides connection establishment with endpoint fallback, table
//! bootstrap SQL, and Diesel row types.

pub mod connection;
pub mod model;

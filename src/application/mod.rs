//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate the guest store
//! to implement the registry's use cases.

pub mod guest;
pub mod report;

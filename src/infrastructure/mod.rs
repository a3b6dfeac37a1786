//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic: configuration, logging, filesystem paths, and wiring.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`paths`] - Default locations under `~/.partyplanner/`

pub mod bootstrap;
pub mod config;
pub mod paths;

//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`age`] - Age derivation from a date of birth
//! - [`clock`] - Source of the current date
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits define contracts implemented by the infrastructure layer.

pub mod age;
pub mod clock;
pub mod entities;
pub mod repositories;

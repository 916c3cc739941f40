//! Domain layer containing the record model and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Repository traits define contracts implemented in
//! [`crate::infrastructure::persistence`]; the lifecycle rules built on top of
//! them live in [`crate::application::services`].

pub mod entities;
pub mod repositories;

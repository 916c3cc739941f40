//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`extract_host`] - Host extraction from HTTP headers

pub mod code_generator;
pub mod extract_host;

//! Utility functions for identifier generation and URL handling.
//!
//! - [`id_generator`] - Random, collision-checked identifier generation
//! - [`uri`] - Destination URI validation

pub mod id_generator;
pub mod uri;

//! Core domain entities.
//!
//! - [`Entry`] - A shortened URL mapping
//! - [`Stats`] - An entry together with its visit counter

pub mod entry;

pub use entry::{Entry, Stats};

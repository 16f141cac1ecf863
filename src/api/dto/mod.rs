//! Data Transfer Objects for API responses.

pub mod health;
pub mod stats;

//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for unit tests.
//!
//! See `tests/repository_entry.rs` for usage examples.

pub mod entry_repository;

pub use entry_repository::EntryRepository;

#[cfg(test)]
pub use entry_repository::MockEntryRepository;

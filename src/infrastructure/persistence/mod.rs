//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryEntryRepository`] - Entry and visit counter storage held in process memory

pub mod memory_entry_repository;

pub use memory_entry_repository::InMemoryEntryRepository;

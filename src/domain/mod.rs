//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Storage trait definitions
//! - [`visit_event`] - Visit tracking event model
//! - [`visit_worker`] - Asynchronous visit counting worker
//!
//! # Visit Processing Flow
//!
//! 1. HTTP handler resolves an identifier and answers with a redirect
//! 2. A [`visit_event::VisitEvent`] is queued on an unbounded channel
//! 3. [`visit_worker::run_visit_worker`] applies events in FIFO order
//! 4. Counters are updated via [`repositories::EntryRepository::increment_counter`]

pub mod entities;
pub mod repositories;
pub mod visit_event;
pub mod visit_worker;

#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;
use url_shortener::application::services::{RedirectService, ShortenerService};
use url_shortener::domain::entities::Entry;
use url_shortener::domain::repositories::EntryRepository;
use url_shortener::domain::visit_worker::run_visit_worker;
use url_shortener::infrastructure::persistence::InMemoryEntryRepository;
use url_shortener::state::AppState;
use url_shortener::utils::id_generator::{DEFAULT_ALPHABET, DEFAULT_ID_LENGTH, IdGenerator};

pub const BASE_URL: &str = "http://localhost:8888";

pub struct TestContext {
    pub state: AppState,
    pub repository: Arc<InMemoryEntryRepository>,
}

/// Builds services over a fresh store and spawns the visit worker.
///
/// Must be called from within a Tokio runtime.
pub fn create_test_context() -> TestContext {
    let generator = IdGenerator::new(DEFAULT_ALPHABET, DEFAULT_ID_LENGTH).unwrap();
    create_test_context_with_generator(generator)
}

pub fn create_test_context_with_generator(generator: IdGenerator) -> TestContext {
    let repository = Arc::new(InMemoryEntryRepository::new());

    let (tx, rx) = mpsc::unbounded_channel();
    tokio::spawn(run_visit_worker(rx, repository.clone()));

    let shortener_service = Arc::new(ShortenerService::new(
        repository.clone(),
        Arc::new(generator),
    ));
    let redirect_service = Arc::new(RedirectService::new(repository.clone(), tx));

    TestContext {
        state: AppState::new(shortener_service, redirect_service, BASE_URL),
        repository,
    }
}

pub async fn create_test_entry(repository: &InMemoryEntryRepository, id: &str, destination: &str) {
    repository
        .insert(Entry::created_now(id.to_string(), destination.to_string()))
        .await
        .unwrap();
}

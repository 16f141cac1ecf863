//! Random short identifier generation.
//!
//! Identifiers are fixed-length strings sampled uniformly from a fixed
//! alphabet. Collisions with stored entries are resolved by drawing a whole
//! new candidate, never by patching single characters.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::repositories::EntryRepository;
use crate::error::AppError;

/// Default identifier alphabet: 64 URL-safe symbols.
pub const DEFAULT_ALPHABET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Default identifier length.
pub const DEFAULT_ID_LENGTH: usize = 5;

/// Invalid generator parameters.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum IdGeneratorError {
    #[error("Identifier alphabet must not be empty")]
    EmptyAlphabet,

    #[error("Identifier alphabet contains '{0}' more than once")]
    DuplicateSymbol(char),

    #[error("Identifier length must be greater than 0")]
    ZeroLength,
}

/// Generator of random, collision-checked identifiers.
pub struct IdGenerator {
    alphabet: Vec<char>,
    length: usize,
    rng: Mutex<StdRng>,
}

impl IdGenerator {
    /// Creates a generator seeded from the operating system, so each process
    /// run produces a different sequence.
    ///
    /// # Errors
    ///
    /// See [`IdGeneratorError`].
    pub fn new(alphabet: &str, length: usize) -> Result<Self, IdGeneratorError> {
        Self::with_rng(alphabet, length, StdRng::from_os_rng())
    }

    /// Creates a generator with a fixed seed. Sequences are reproducible.
    pub fn with_seed(alphabet: &str, length: usize, seed: u64) -> Result<Self, IdGeneratorError> {
        Self::with_rng(alphabet, length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(alphabet: &str, length: usize, rng: StdRng) -> Result<Self, IdGeneratorError> {
        if length == 0 {
            return Err(IdGeneratorError::ZeroLength);
        }

        let mut symbols: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if symbols.contains(&c) {
                return Err(IdGeneratorError::DuplicateSymbol(c));
            }
            symbols.push(c);
        }

        if symbols.is_empty() {
            return Err(IdGeneratorError::EmptyAlphabet);
        }

        Ok(Self {
            alphabet: symbols,
            length,
            rng: Mutex::new(rng),
        })
    }

    /// Number of distinct identifiers this generator can produce.
    ///
    /// Saturates at `u128::MAX`.
    pub fn capacity(&self) -> u128 {
        u32::try_from(self.length)
            .ok()
            .and_then(|len| (self.alphabet.len() as u128).checked_pow(len))
            .unwrap_or(u128::MAX)
    }

    /// Draws one candidate identifier without checking storage.
    pub fn sample(&self) -> String {
        let mut rng = self.rng.lock();
        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }

    /// Draws candidates until one is not present in `repository`.
    ///
    /// There is no retry limit: with the default 64^5 space collisions are
    /// rare, and the loop stays correct however many of them occur.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if every identifier is already taken.
    pub async fn next_unique<R>(&self, repository: &R) -> Result<String, AppError>
    where
        R: EntryRepository + ?Sized,
    {
        let taken = repository.count().await? as u128;
        if taken >= self.capacity() {
            error!(taken = %taken, capacity = %self.capacity(), "Identifier space exhausted");
            return Err(AppError::internal(
                "Identifier space exhausted",
                json!({ "taken": taken.to_string(), "length": self.length }),
            ));
        }

        loop {
            let candidate = self.sample();
            if !repository.exists(&candidate).await? {
                return Ok(candidate);
            }
            debug!(candidate = %candidate, "Identifier collision, resampling");
        }
    }
}

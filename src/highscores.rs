//! Best score tracking
//!
//! A single non-decreasing integer, persisted through a `ScoreStorage`.

use crate::persistence::PersistError;

/// Backend holding the persisted best score
pub trait ScoreStorage {
    /// Stored value, or 0 when nothing usable is stored
    fn load(&self) -> u32;
    /// Replace the stored value
    fn save(&mut self, score: u32) -> Result<(), PersistError>;
}

/// In-memory storage, counts saves
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub score: Option<u32>,
    pub saves: usize,
}

impl ScoreStorage for MemoryStore {
    fn load(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    fn save(&mut self, score: u32) -> Result<(), PersistError> {
        self.score = Some(score);
        self.saves += 1;
        Ok(())
    }
}

/// The best score seen so far
pub struct BestScore {
    score: u32,
    storage: Box<dyn ScoreStorage>,
}

impl std::fmt::Debug for BestScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BestScore")
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

impl BestScore {
    /// Load the current best from storage
    pub fn load(storage: Box<dyn ScoreStorage>) -> Self {
        let score = storage.load();
        Self { score, storage }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Offer a finished run's score. Only a strictly higher score is kept and
    /// saved. Returns true if it became the new best.
    pub fn submit(&mut self, candidate: u32) -> bool {
        if candidate <= self.score {
            return false;
        }
        self.score = candidate;
        match self.storage.save(candidate) {
            Ok(()) => log::info!("New best score {} saved", candidate),
            Err(error) => log::warn!("New best score {} not saved: {}", candidate, error),
        }
        true
    }
}

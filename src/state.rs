//! Shared application state and the operations behind the API.

use crate::bank::{Lookup, QuestionBank};
use crate::error::ApiError;
use crate::pick::{Picker, ThreadRngPicker};
use std::sync::Arc;

/// Shared application state
///
/// The question bank is loaded once at startup and never mutated afterwards,
/// so handlers share it without locking. The picker is the injected random
/// source; production wires in [`ThreadRngPicker`].
#[derive(Clone)]
pub struct AppState {
    bank: Arc<QuestionBank>,
    picker: Arc<dyn Picker>,
}

impl AppState {
    pub fn new(bank: QuestionBank) -> Self {
        Self::with_picker(bank, Arc::new(ThreadRngPicker))
    }

    /// Build state with a caller-supplied random source (tests substitute a
    /// fixed one to pin down draws).
    pub fn with_picker(bank: QuestionBank, picker: Arc<dyn Picker>) -> Self {
        Self {
            bank: Arc::new(bank),
            picker,
        }
    }

    /// Draw one prompt at random for the given difficulty and choice.
    ///
    /// Validation order is category first, then choice, then emptiness; each
    /// draw is independent and repeats are allowed.
    pub fn random_question(&self, difficulty: &str, choice: &str) -> Result<String, ApiError> {
        match self.bank.lookup(difficulty, choice) {
            Lookup::UnknownDifficulty => Err(ApiError::InvalidCategory),
            Lookup::UnknownChoice => Err(ApiError::InvalidChoice),
            Lookup::Found(prompts) if prompts.is_empty() => {
                tracing::warn!(difficulty, choice, "Prompt list is empty");
                Err(ApiError::NoQuestionsAvailable)
            }
            Lookup::Found(prompts) => {
                let index = self.picker.pick_index(prompts.len());
                Ok(prompts[index].clone())
            }
        }
    }

    /// All difficulty levels, in dataset order.
    pub fn difficulties(&self) -> Vec<String> {
        self.bank.difficulties()
    }

    /// All choices under a difficulty, in dataset order.
    pub fn choices(&self, difficulty: &str) -> Result<Vec<String>, ApiError> {
        self.bank
            .choices(difficulty)
            .ok_or(ApiError::InvalidDifficulty)
    }

    /// Pick one name at random from an already-normalized list.
    ///
    /// Callers clean the list first (strings only, trimmed, non-empty);
    /// this enforces the 2-to-4 player range and draws.
    pub fn select_player(&self, names: &[String]) -> Result<String, ApiError> {
        if !(2..=4).contains(&names.len()) {
            return Err(ApiError::InvalidPlayerCount);
        }
        Ok(names[self.picker.pick_index(names.len())].clone())
    }
}

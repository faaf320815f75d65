//! The question dataset: difficulty -> choice -> prompts.
//!
//! Loaded once from a JSON document at startup and shared read-only for the
//! lifetime of the process. Key order follows the document, so the listing
//! endpoints return categories in the order the dataset author wrote them.

use indexmap::IndexMap;
use serde::Deserialize;
use std::path::Path;

/// Errors that can occur while loading the question bank
#[derive(Debug, thiserror::Error)]
pub enum BankError {
    #[error("failed to read question file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse question file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Outcome of resolving a (difficulty, choice) pair against the bank.
///
/// The two miss cases are distinct because the API reports them with
/// different error messages.
#[derive(Debug, PartialEq)]
pub enum Lookup<'a> {
    /// Both keys exist; the prompt list may still be empty.
    Found(&'a [String]),
    /// The difficulty key is not in the bank.
    UnknownDifficulty,
    /// The difficulty exists but has no such choice under it.
    UnknownChoice,
}

/// The full set of prompts, keyed by difficulty and then by choice.
///
/// Shaped as `{ difficulty: { choice: [prompt, ...] } }` on disk. Never
/// mutated after load; handlers hold it behind an `Arc` with no lock.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    categories: IndexMap<String, IndexMap<String, Vec<String>>>,
}

impl QuestionBank {
    /// Load the bank from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, BankError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse the bank from a JSON string.
    pub fn from_json(raw: &str) -> Result<Self, BankError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// All difficulty keys, in document order.
    pub fn difficulties(&self) -> Vec<String> {
        self.categories.keys().cloned().collect()
    }

    /// Choice keys under a difficulty, in document order.
    ///
    /// `None` if the difficulty is not in the bank.
    pub fn choices(&self, difficulty: &str) -> Option<Vec<String>> {
        self.categories
            .get(difficulty)
            .map(|choices| choices.keys().cloned().collect())
    }

    /// Resolve a (difficulty, choice) pair to its prompt list.
    pub fn lookup(&self, difficulty: &str, choice: &str) -> Lookup<'_> {
        match self.categories.get(difficulty) {
            None => Lookup::UnknownDifficulty,
            Some(choices) => match choices.get(choice) {
                None => Lookup::UnknownChoice,
                Some(prompts) => Lookup::Found(prompts),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn sample_bank() -> QuestionBank {
        QuestionBank::from_json(
            r#"{
                "kids": {
                    "truth": ["What is your favorite color?", "What makes you laugh?"],
                    "dare": ["Hop on one foot ten times"]
                },
                "adult": {
                    "truth": ["What was your worst job interview?"],
                    "dare": []
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_difficulties_in_document_order() {
        let bank = sample_bank();
        assert_eq!(bank.difficulties(), vec!["kids", "adult"]);
    }

    #[test]
    fn test_choices_in_document_order() {
        let bank = sample_bank();
        assert_eq!(bank.choices("kids"), Some(vec!["truth".to_string(), "dare".to_string()]));
        assert_eq!(bank.choices("impossible"), None);
    }

    #[test]
    fn test_lookup_found() {
        let bank = sample_bank();
        match bank.lookup("kids", "dare") {
            Lookup::Found(prompts) => assert_eq!(prompts, ["Hop on one foot ten times"]),
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_lookup_distinguishes_miss_levels() {
        let bank = sample_bank();
        assert_eq!(bank.lookup("expert", "truth"), Lookup::UnknownDifficulty);
        assert_eq!(bank.lookup("kids", "double-dare"), Lookup::UnknownChoice);
    }

    #[test]
    fn test_lookup_empty_list_is_still_found() {
        let bank = sample_bank();
        match bank.lookup("adult", "dare") {
            Lookup::Found(prompts) => assert!(prompts.is_empty()),
            other => panic!("Expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"kids": {{"truth": ["Q1"]}}}}"#).unwrap();

        let bank = QuestionBank::load(file.path()).unwrap();
        assert_eq!(bank.difficulties(), vec!["kids"]);
    }

    #[test]
    fn test_load_missing_file() {
        let result = QuestionBank::load("/no/such/questions.json");
        assert!(matches!(result, Err(BankError::Io(_))));
    }

    #[test]
    fn test_load_malformed_document() {
        let result = QuestionBank::from_json(r#"{"kids": ["not", "a", "mapping"]}"#);
        assert!(matches!(result, Err(BankError::Parse(_))));
    }
}

//! Word lists for hangman
//!
//! Provides the embedded word list compiled into the binary, custom list loading,
//! and uniform random selection.

mod embedded;
pub mod loader;
pub mod picker;

pub use embedded::{WORDS, WORDS_COUNT};
pub use picker::{IndexSource, RandomIndex, SequenceIndex, pick_word};

use crate::core::Word;
use log::debug;
use std::fmt;
use std::path::Path;

/// A non-empty list of candidate words
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<Word>,
}

/// Error type for unusable word lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordListError {
    Empty,
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word list contains no valid words"),
        }
    }
}

impl std::error::Error for WordListError {}

impl WordList {
    /// # Errors
    /// Returns [`WordListError::Empty`] if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        Ok(Self { words })
    }

    /// The list compiled into the binary
    ///
    /// # Panics
    /// Never in practice: the build script refuses an empty word file.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(loader::words_from_slice(WORDS)).expect("embedded word list is non-empty")
    }

    /// Load a custom list, one word per line
    ///
    /// # Errors
    /// Fails if the file cannot be read or holds no valid words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let words = loader::load_from_file(path)?;
        Ok(Self::new(words)?)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Pick a word uniformly through `source`
    pub fn pick<S: IndexSource + ?Sized>(&self, source: &mut S) -> Word {
        let word = pick_word(&self.words, source).clone();
        debug!("picked a {}-letter word from {} candidates", word.len(), self.len());
        word
    }
}

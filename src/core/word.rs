//! Hangman word representation
//!
//! A Word stores the target text along with letter position indices used to reveal slots.

use rustc_hash::FxHashMap;
use std::fmt;

/// A lowercase alphabetic target word with letter position tracking
///
/// Repeated letters share one entry in the position map, so a single guess reveals all of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<u8>,
    char_positions: FxHashMap<u8, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one letter"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("Buzzard").unwrap();
    /// assert_eq!(word.text(), "buzzard");
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("r2d2").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let chars = text.as_bytes().to_vec();

        let mut char_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes, one per slot
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Number of letter slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: construction rejects empty text
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: u8) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map_or(&[], std::vec::Vec::as_slice)
    }

    /// Distinct letters of the word, in no particular order
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.char_positions.keys().copied()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("axiom").unwrap();
        assert_eq!(word.text(), "axiom");
        assert_eq!(word.chars(), b"axiom");
        assert_eq!(word.len(), 5);
        assert!(!word.is_empty());
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("CYCLE").unwrap();
        assert_eq!(word.text(), "cycle");

        let word2 = Word::new("BuZzArD").unwrap();
        assert_eq!(word2.text(), "buzzard");
    }

    #[test]
    fn word_creation_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("cran3"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("bag pipes"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("crypt!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("curaçao"), Err(WordError::NonAscii));
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("crypt").unwrap();
        assert!(word.has_letter(b'c'));
        assert!(word.has_letter(b'y'));
        assert!(!word.has_letter(b'a'));
        assert!(!word.has_letter(b'z'));
    }

    #[test]
    fn word_positions_of_repeated_letters() {
        let word = Word::new("buzzard").unwrap();
        assert_eq!(word.positions_of(b'z'), &[2, 3]);
        assert_eq!(word.positions_of(b'b'), &[0]);
        assert_eq!(word.positions_of(b'q'), &[]);
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("beekeeper").unwrap();
        let mut letters: Vec<u8> = word.distinct_letters().collect();
        letters.sort_unstable();
        assert_eq!(letters, b"bekpr");
    }

    #[test]
    fn word_display() {
        let word = Word::new("banjo").unwrap();
        assert_eq!(format!("{word}"), "banjo");
    }
}

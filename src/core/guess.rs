//! A single guessed letter

use std::fmt;

/// One of the 26 lowercase Latin letters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Guess(u8);

impl Guess {
    /// Derive a guess from a key character
    ///
    /// Uppercase letters are folded to lowercase. Anything outside `a..=z` after folding
    /// (digits, punctuation, accented letters) yields `None`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::from_key('Q').map(|g| g.as_char()), Some('q'));
    /// assert!(Guess::from_key('7').is_none());
    /// ```
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        let lower = key.to_ascii_lowercase();
        if lower.is_ascii_lowercase() {
            Some(Self(lower as u8))
        } else {
            None
        }
    }

    /// The letter as a byte
    #[inline]
    #[must_use]
    pub const fn letter(self) -> u8 {
        self.0
    }

    /// The letter as a char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_key_accepts_every_latin_letter() {
        for key in 'a'..='z' {
            assert_eq!(Guess::from_key(key).map(Guess::as_char), Some(key));
        }
        for key in 'A'..='Z' {
            assert_eq!(
                Guess::from_key(key).map(Guess::as_char),
                Some(key.to_ascii_lowercase())
            );
        }
    }

    #[test]
    fn from_key_rejects_non_letters() {
        for key in ['0', '9', ' ', '-', '_', '\n', 'é', 'ß', 'Ω', '🎉'] {
            assert!(Guess::from_key(key).is_none(), "{key:?} should be rejected");
        }
    }

    #[test]
    fn display_is_the_letter() {
        assert_eq!(Guess::from_key('m').unwrap().to_string(), "m");
    }
}

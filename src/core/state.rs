//! Round state and guess evaluation
//!
//! `GameState` is the single mutable context of a session. All queries are pure; the only
//! mutation paths are [`GameState::submit_key`] / [`GameState::submit`] and [`GameState::restart`].

use super::{Guess, Word};
use std::fmt;

/// Wrong guesses allowed before the round is lost
pub const MAX_MISTAKES: usize = 3;

/// Current round plus the cross-round streak
#[derive(Debug, Clone)]
pub struct GameState {
    word: Word,
    guessed: Vec<Guess>,
    max_mistakes: usize,
    streak: usize,
}

/// Where the current round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a key did not become a guess
///
/// Guards are checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotALetter,
    AlreadyGuessed,
    RoundLost,
    RoundWon,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotALetter => write!(f, "not a letter"),
            Self::AlreadyGuessed => write!(f, "letter already guessed"),
            Self::RoundLost => write!(f, "round already lost"),
            Self::RoundWon => write!(f, "round already won"),
        }
    }
}

/// Which restart control was activated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartKind {
    /// Keeps the streak and adds one
    AfterWin,
    /// Zeroes the streak
    AfterLoss,
}

impl GameState {
    /// Start the first round with a zero streak
    #[must_use]
    pub const fn new(word: Word) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            max_mistakes: MAX_MISTAKES,
            streak: 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// Guesses in the order they were made
    #[inline]
    #[must_use]
    pub fn guessed(&self) -> &[Guess] {
        &self.guessed
    }

    #[inline]
    #[must_use]
    pub const fn max_mistakes(&self) -> usize {
        self.max_mistakes
    }

    #[inline]
    #[must_use]
    pub const fn streak(&self) -> usize {
        self.streak
    }

    /// Guesses not present in the word, in guess order
    #[must_use]
    pub fn wrong_guesses(&self) -> Vec<Guess> {
        self.guessed
            .iter()
            .copied()
            .filter(|g| !self.word.has_letter(g.letter()))
            .collect()
    }

    /// Guesses present in the word, in guess order
    #[must_use]
    pub fn correct_guesses(&self) -> Vec<Guess> {
        self.guessed
            .iter()
            .copied()
            .filter(|g| self.word.has_letter(g.letter()))
            .collect()
    }

    #[must_use]
    pub fn mistake_count(&self) -> usize {
        self.guessed
            .iter()
            .filter(|g| !self.word.has_letter(g.letter()))
            .count()
    }

    #[must_use]
    pub fn remaining_mistakes(&self) -> usize {
        self.max_mistakes.saturating_sub(self.mistake_count())
    }

    /// One more mistake loses the round
    #[must_use]
    pub fn is_almost_lost(&self) -> bool {
        self.mistake_count() + 1 == self.max_mistakes
    }

    /// Whether a letter of the word has been guessed
    #[must_use]
    pub fn is_revealed(&self, letter: u8) -> bool {
        self.guessed.iter().any(|g| g.letter() == letter)
    }

    /// Every distinct letter of the word has been guessed at least once
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.word
            .distinct_letters()
            .all(|letter| self.is_revealed(letter))
    }

    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.mistake_count() >= self.max_mistakes
    }

    /// Round status; a win takes precedence over a loss
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        if self.has_won() {
            Outcome::Won
        } else if self.has_lost() {
            Outcome::Lost
        } else {
            Outcome::InProgress
        }
    }

    /// Turn a key into a guess, applying every guard
    ///
    /// # Errors
    /// Returns the first failing guard; the state is left untouched.
    pub fn submit_key(&mut self, key: char) -> Result<Guess, Rejection> {
        let guess = Guess::from_key(key).ok_or(Rejection::NotALetter)?;
        self.submit(guess)
    }

    /// Record an already-validated letter
    ///
    /// # Errors
    /// Returns [`Rejection::AlreadyGuessed`], [`Rejection::RoundLost`] or
    /// [`Rejection::RoundWon`]; the state is left untouched.
    pub fn submit(&mut self, guess: Guess) -> Result<Guess, Rejection> {
        if self.guessed.contains(&guess) {
            return Err(Rejection::AlreadyGuessed);
        }
        if self.has_lost() {
            return Err(Rejection::RoundLost);
        }
        if self.has_won() {
            return Err(Rejection::RoundWon);
        }

        self.guessed.push(guess);
        Ok(guess)
    }

    /// Begin a new round with `word`, adjusting the streak for how the last round ended
    pub fn restart(&mut self, kind: RestartKind, word: Word) {
        match kind {
            RestartKind::AfterWin => self.streak += 1,
            RestartKind::AfterLoss => self.streak = 0,
        }
        self.word = word;
        self.guessed.clear();
    }
}

//! Display model derived from the game state
//!
//! A [`View`] holds everything a surface needs to draw one full frame, in display order:
//! word slots, mistakes, streak, then at most one banner. Building it is pure, so two
//! builds from the same state are equal and every surface can redraw from scratch.

use crate::core::{GameState, Outcome, RestartKind};

/// Placeholder shown for an unguessed letter
pub const MASK: char = '_';

/// Label of the restart control
pub const RESTART_LABEL: &str = "RESTART";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub slots: Vec<Slot>,
    pub mistakes: Vec<char>,
    pub mistake_count: usize,
    pub max_mistakes: usize,
    /// One more mistake loses the round
    pub almost_lost: bool,
    pub streak: usize,
    pub banner: Option<Banner>,
}

/// One letter position of the target word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Revealed(char),
    Hidden,
}

impl Slot {
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Revealed(c) => c,
            Self::Hidden => MASK,
        }
    }
}

/// End-of-round message with its restart control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Won,
    Lost { word: String },
}

impl Banner {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Won => "You win! 🎉".to_string(),
            Self::Lost { word } => format!("You lose! 🤕 The word was: {word}"),
        }
    }

    /// The restart variant this banner's control triggers
    #[must_use]
    pub const fn restart(&self) -> RestartKind {
        match self {
            Self::Won => RestartKind::AfterWin,
            Self::Lost { .. } => RestartKind::AfterLoss,
        }
    }
}

impl View {
    /// Derive the complete frame for `state`
    #[must_use]
    pub fn build(state: &GameState) -> Self {
        let word = state.word();
        let mut slots = vec![Slot::Hidden; word.len()];
        for guess in state.correct_guesses() {
            for &pos in word.positions_of(guess.letter()) {
                slots[pos] = Slot::Revealed(guess.as_char());
            }
        }

        let mistakes: Vec<char> = state.wrong_guesses().iter().map(|g| g.as_char()).collect();

        let banner = match state.outcome() {
            Outcome::Won => Some(Banner::Won),
            Outcome::Lost => Some(Banner::Lost {
                word: state.word().text().to_string(),
            }),
            Outcome::InProgress => None,
        };

        Self {
            slots,
            mistake_count: mistakes.len(),
            mistakes,
            max_mistakes: state.max_mistakes(),
            almost_lost: state.is_almost_lost(),
            streak: state.streak(),
            banner,
        }
    }

    /// The restart control, present only when the round is over
    #[must_use]
    pub fn restart_control(&self) -> Option<RestartKind> {
        self.banner.as_ref().map(Banner::restart)
    }
}

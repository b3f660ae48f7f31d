//! Core domain types for hangman
//!
//! This module contains the game rules with no I/O and no randomness.
//! Everything here is pure apart from the two mutation paths on `GameState`.

mod guess;
mod state;
mod word;

pub use guess::Guess;
pub use state::{GameState, MAX_MISTAKES, Outcome, Rejection, RestartKind};
pub use word::{Word, WordError};

//! Hangman
//!
//! A terminal hangman game: guess the hidden word one letter at a time before making
//! three mistakes. Wins build a streak; a loss resets it.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameState, Word};
//! use hangman::view::View;
//!
//! let mut state = GameState::new(Word::new("axiom").unwrap());
//! state.submit_key('x').unwrap();
//!
//! let view = View::build(&state);
//! assert_eq!(view.slots.iter().map(|s| s.glyph()).collect::<String>(), "_x___");
//! ```

// Core domain types and rules
pub mod core;

// Word lists and random selection
pub mod wordlists;

// Display model shared by every surface
pub mod view;

// Game session driven by input handlers
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

//! Play session: the game state plus everything the handlers need around it
//!
//! Both surfaces drive a [`Session`]: key handlers call [`Session::press`], restart
//! controls call [`Session::activate_restart`]. Each returns whether the state changed,
//! which is the surface's cue to redraw.

use crate::core::{GameState, Outcome, Rejection, RestartKind};
use crate::view::View;
use crate::wordlists::{IndexSource, WordList};
use log::debug;

/// Session-wide counters, kept in memory only
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub best_streak: usize,
}

impl Statistics {
    /// Percentage of finished rounds that were won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played > 0 {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        } else {
            0.0
        }
    }

    fn record(&mut self, outcome: Outcome, streak: usize) {
        match outcome {
            Outcome::Won => {
                self.rounds_played += 1;
                self.rounds_won += 1;
                self.best_streak = self.best_streak.max(streak + 1);
            }
            Outcome::Lost => self.rounds_played += 1,
            Outcome::InProgress => {}
        }
    }
}

pub struct Session<'a, S: IndexSource> {
    words: &'a WordList,
    source: S,
    state: GameState,
    stats: Statistics,
}

impl<'a, S: IndexSource> Session<'a, S> {
    /// Pick the first word and start with a zero streak
    pub fn new(words: &'a WordList, mut source: S) -> Self {
        let state = GameState::new(words.pick(&mut source));
        Self {
            words,
            source,
            state,
            stats: Statistics::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub fn view(&self) -> View {
        View::build(&self.state)
    }

    /// Handle one key; `true` when a guess was recorded
    ///
    /// Rejected keys leave the session untouched.
    pub fn press(&mut self, key: char) -> bool {
        match self.state.submit_key(key) {
            Ok(guess) => {
                debug!("guess '{guess}' accepted");
                let outcome = self.state.outcome();
                if outcome.is_terminal() {
                    debug!("round over: {outcome:?}");
                    self.stats.record(outcome, self.state.streak());
                }
                true
            }
            Err(rejection) => {
                log_rejection(key, rejection);
                false
            }
        }
    }

    /// Trigger the restart control if one is showing; `true` when a new round began
    pub fn activate_restart(&mut self) -> bool {
        match self.view().restart_control() {
            Some(kind) => {
                self.restart(kind);
                true
            }
            None => false,
        }
    }

    fn restart(&mut self, kind: RestartKind) {
        let word = self.words.pick(&mut self.source);
        self.state.restart(kind, word);
        debug!("restart {kind:?}, streak now {}", self.state.streak());
    }
}

fn log_rejection(key: char, rejection: Rejection) {
    debug!("key {key:?} ignored: {rejection}");
}

//! Simulate - automated play over a whole word list
//!
//! Plays one round per word with an automatic guesser and reports how often the
//! mistake ceiling is beaten.

use crate::core::{GameState, Guess, MAX_MISTAKES, Outcome, Word};
use crate::output::formatters::create_progress_bar;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Letters ordered by frequency in English text
pub const ENGLISH_FREQUENCY: &str = "etaoinshrdlcumwfgypbvkjxqz";

/// Chooses the next letter to try
pub trait Guesser {
    /// Return an unguessed letter, or `None` when every letter has been tried
    fn next_guess(&mut self, state: &GameState) -> Option<Guess>;
}

/// Always tries the most common letter not yet guessed
pub struct FrequencyGuesser;

impl Guesser for FrequencyGuesser {
    fn next_guess(&mut self, state: &GameState) -> Option<Guess> {
        ENGLISH_FREQUENCY
            .chars()
            .filter_map(Guess::from_key)
            .find(|g| !state.guessed().contains(g))
    }
}

/// Tries unguessed letters uniformly at random
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Guesser for RandomGuesser {
    fn next_guess(&mut self, state: &GameState) -> Option<Guess> {
        let open: Vec<Guess> = ('a'..='z')
            .filter_map(Guess::from_key)
            .filter(|g| !state.guessed().contains(g))
            .collect();
        open.choose(&mut self.rng).copied()
    }
}

/// Guesser selected by name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuesserKind {
    Frequency,
    Random,
}

impl GuesserKind {
    /// Create guesser kind from name string
    ///
    /// Supported names: "frequency", "random". Defaults to frequency if unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "random" => Self::Random,
            _ => Self::Frequency,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Random => "random",
        }
    }
}

/// Result from playing a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub word: String,
    pub won: bool,
    pub guesses: usize,
    pub mistakes: usize,
}

/// Statistics from playing every word
#[derive(Debug)]
pub struct SimulationStatistics {
    pub guesser: GuesserKind,
    pub total_words: usize,
    pub won: usize,
    pub lost: usize,
    /// Wins keyed by mistakes made on the way
    pub mistake_distribution: BTreeMap<usize, usize>,
    pub average_guesses: f64,
    pub lost_words: Vec<String>,
    pub total_time: Duration,
}

impl SimulationStatistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_words > 0 {
            self.won as f64 / self.total_words as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// Play one round of `word` to completion
pub fn play_round<G: Guesser + ?Sized>(word: &Word, guesser: &mut G) -> RoundResult {
    let mut state = GameState::new(word.clone());

    while state.outcome() == Outcome::InProgress {
        let Some(guess) = guesser.next_guess(&state) else {
            break;
        };
        if state.submit(guess).is_err() {
            break;
        }
    }

    RoundResult {
        word: word.text().to_string(),
        won: state.outcome() == Outcome::Won,
        guesses: state.guessed().len(),
        mistakes: state.mistake_count(),
    }
}

/// Play every word (or the first `limit`) in parallel
///
/// Random guessers are seeded with `seed` plus the word's index, so a run is
/// reproducible for a given seed regardless of thread scheduling.
pub fn run_simulation(
    words: &[Word],
    guesser: GuesserKind,
    limit: Option<usize>,
    seed: u64,
) -> SimulationStatistics {
    let test_words = &words[..limit.unwrap_or(words.len()).min(words.len())];

    let pb = ProgressBar::new(test_words.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Vec<RoundResult> = test_words
        .par_iter()
        .enumerate()
        .map(|(i, word)| {
            let result = match guesser {
                GuesserKind::Frequency => play_round(word, &mut FrequencyGuesser),
                GuesserKind::Random => {
                    play_round(word, &mut RandomGuesser::seeded(seed.wrapping_add(i as u64)))
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_with_message("Complete!");

    let stats = summarize(guesser, &results, start.elapsed());
    info!(
        "{} guesser won {}/{} rounds",
        guesser.name(),
        stats.won,
        stats.total_words
    );
    stats
}

fn summarize(
    guesser: GuesserKind,
    results: &[RoundResult],
    total_time: Duration,
) -> SimulationStatistics {
    let won = results.iter().filter(|r| r.won).count();

    let mut mistake_distribution = BTreeMap::new();
    for result in results.iter().filter(|r| r.won) {
        *mistake_distribution.entry(result.mistakes).or_insert(0) += 1;
    }

    let winning_guesses: usize = results.iter().filter(|r| r.won).map(|r| r.guesses).sum();
    let average_guesses = if won > 0 {
        winning_guesses as f64 / won as f64
    } else {
        0.0
    };

    let lost_words = results
        .iter()
        .filter(|r| !r.won)
        .map(|r| r.word.clone())
        .collect();

    SimulationStatistics {
        guesser,
        total_words: results.len(),
        won,
        lost: results.len() - won,
        mistake_distribution,
        average_guesses,
        lost_words,
        total_time,
    }
}

/// Print simulation statistics
pub fn print_simulation_statistics(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Simulation Results ({} guesser) ", stats.guesser.name());
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Words played:    {}", stats.total_words);
    println!(
        "  Won:             {} {}",
        stats.won,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.lost > 0 {
        println!(
            "  Lost:            {} {}",
            stats.lost,
            format!("({:.1}%)", 100.0 - stats.win_rate()).red()
        );
    }
    println!(
        "  Win rate:        [{}]",
        create_progress_bar(stats.win_rate(), 100.0, 30).green()
    );
    println!(
        "  Avg guesses/win: {}",
        format!("{:.2}", stats.average_guesses).bright_yellow().bold()
    );
    println!(
        "  Total time:      {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.won > 0 {
        println!("\n📈 {}", "Mistakes in won rounds".bright_cyan().bold());
        let max_count = stats
            .mistake_distribution
            .values()
            .copied()
            .max()
            .unwrap_or(1);
        for mistakes in 0..MAX_MISTAKES {
            let count = stats.mistake_distribution.get(&mistakes).copied().unwrap_or(0);
            let bar_len = count * 30 / max_count;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_len).green(),
                "░".repeat(30_usize.saturating_sub(bar_len)).bright_black()
            );
            println!("  {mistakes} mistakes: {bar} {count:4}");
        }
    }

    if !stats.lost_words.is_empty() {
        println!("\n😰 {}", "Words that beat the guesser".yellow().bold());
        for word in stats.lost_words.iter().take(10) {
            println!("  {}", word.to_uppercase().yellow());
        }
    }
}

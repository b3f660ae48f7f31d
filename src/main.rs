//! Hangman - CLI
//!
//! Terminal hangman with TUI and line modes, plus an automated simulation.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::{GuesserKind, print_simulation_statistics, run_simple, run_simulation},
    wordlists::{RandomIndex, WordList},
};
use log::info;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before three mistakes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Seed for word selection (random every run if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log records to this file (the TUI logs nowhere else)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Play every word with an automatic guesser and report statistics
    Simulate {
        /// Guesser: frequency (default), random
        #[arg(short, long, default_value = "frequency")]
        guesser: String,

        /// Limit number of words to play
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the active word list
    Words,
}

/// Load the word list selected by the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "builtin" => Ok(WordList::builtin()),
        path => WordList::from_file(path),
    }
}

/// Where log records go
#[derive(Debug, PartialEq, Eq)]
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Off,
}

/// The TUI owns the terminal, so it never logs to stderr
fn log_target<'a>(command: &Commands, log_file: Option<&'a Path>) -> LogTarget<'a> {
    match (log_file, command) {
        (Some(path), _) => LogTarget::File(path),
        (None, Commands::Play) => LogTarget::Off,
        (None, _) => LogTarget::Stderr,
    }
}

fn init_logging(target: &LogTarget<'_>) -> Result<()> {
    match target {
        LogTarget::Stderr => env_logger::try_init().unwrap_or(()),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            env_logger::Builder::from_default_env()
                .target(env_logger::Target::Pipe(Box::new(file)))
                .try_init()
                .unwrap_or(());
        }
        LogTarget::Off => {}
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&log_target(&command, cli.log_file.as_deref()))?;

    let words = load_wordlist(&cli.wordlist)?;
    info!("using {} words from '{}'", words.len(), cli.wordlist);

    match command {
        Commands::Play => run_play_command(&words, cli.seed),
        Commands::Simple => Ok(run_simple(&words, RandomIndex::new(cli.seed))?),
        Commands::Simulate { guesser, limit } => {
            run_simulate_command(&words, &guesser, limit, cli.seed);
            Ok(())
        }
        Commands::Words => {
            for word in words.words() {
                println!("{word}");
            }
            Ok(())
        }
    }
}

fn run_play_command(words: &WordList, seed: Option<u64>) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let app = App::new(words, RandomIndex::new(seed));
    run_tui(app)
}

fn run_simulate_command(words: &WordList, guesser: &str, limit: Option<usize>, seed: Option<u64>) {
    let kind = GuesserKind::from_name(guesser);
    let seed = seed.unwrap_or_else(rand::random);

    println!(
        "🎯 Simulating {} words with the {} guesser...",
        limit.unwrap_or(words.len()).min(words.len()),
        kind.name()
    );

    let stats = run_simulation(words.words(), kind, limit, seed);
    print_simulation_statistics(&stats);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> (Commands, Option<PathBuf>) {
        let cli = Cli::try_parse_from(args).unwrap();
        (cli.command.unwrap_or(Commands::Play), cli.log_file)
    }

    #[test]
    fn tui_does_not_log_to_stderr() {
        let (command, log_file) = parse(&["hangman"]);
        assert_eq!(log_target(&command, log_file.as_deref()), LogTarget::Off);

        let (command, log_file) = parse(&["hangman", "play"]);
        assert_eq!(log_target(&command, log_file.as_deref()), LogTarget::Off);
    }

    #[test]
    fn tui_logs_to_requested_file() {
        let (command, log_file) = parse(&["hangman", "play", "--log-file", "hangman.log"]);
        assert_eq!(
            log_target(&command, log_file.as_deref()),
            LogTarget::File(Path::new("hangman.log"))
        );
    }

    #[test]
    fn other_modes_log_to_stderr() {
        let cases: [&[&str]; 3] = [
            &["hangman", "simple"],
            &["hangman", "simulate", "-l", "3"],
            &["hangman", "words"],
        ];
        for args in cases {
            let (command, log_file) = parse(args);
            assert_eq!(log_target(&command, log_file.as_deref()), LogTarget::Stderr);
        }
    }
}

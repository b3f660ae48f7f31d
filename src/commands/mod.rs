//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::{play_lines, run_simple};
pub use simulate::{
    FrequencyGuesser, Guesser, GuesserKind, RandomGuesser, SimulationStatistics,
    print_simulation_statistics, run_simulation,
};

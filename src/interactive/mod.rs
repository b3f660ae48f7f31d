//! Interactive TUI mode

mod app;
mod rendering;

pub use app::{App, run_tui};
pub use rendering::ui;

//! Terminal output formatting
//!
//! Display utilities for line mode and shared text helpers.

pub mod display;
pub mod formatters;

pub use display::{print_view, render_view};

//! Plain-terminal rendering of a game view

use super::formatters::{ALMOST_LOST_MARK, mistake_list, mistakes_gauge, spaced_slots};
use crate::view::{Banner, RESTART_LABEL, View};
use colored::Colorize;
use std::io::{self, Write};

/// Render the full frame for line mode, top to bottom
///
/// The restart control is rendered as a prompt; line mode activates it with `restart`.
#[must_use]
pub fn render_view(view: &View) -> String {
    let mut lines = Vec::with_capacity(6);

    lines.push(format!(
        "Word:     {}",
        spaced_slots(&view.slots).bright_yellow().bold()
    ));

    let mistakes = format!(
        "Mistakes: {} ({}) {}",
        mistake_list(&view.mistakes),
        view.mistake_count,
        mistakes_gauge(view.mistake_count, view.max_mistakes)
    );
    if view.almost_lost {
        lines.push(format!("{mistakes} {ALMOST_LOST_MARK}").red().bold().to_string());
    } else {
        lines.push(mistakes);
    }

    lines.push(format!("Streak:   {}", view.streak.to_string().green()));

    if let Some(banner) = &view.banner {
        let message = match banner {
            Banner::Won => banner.message().bright_green().bold(),
            Banner::Lost { .. } => banner.message().bright_red().bold(),
        };
        lines.push(String::new());
        lines.push(message.to_string());
        lines.push(format!(
            "[{}] type 'restart' to play again",
            RESTART_LABEL.bold()
        ));
    }

    lines.join("\n")
}

/// Write the frame with a separator rule above it
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn print_view<W: Write>(out: &mut W, view: &View) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(out, "{}", render_view(view))
}

//! Simple line mode
//!
//! Text-based game without the TUI: every character typed on a line is one key press.

use crate::output::print_view;
use crate::session::Session;
use crate::wordlists::{IndexSource, WordList};
use std::io::{self, BufRead, Write};

/// Run line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading stdin or writing stdout fails.
pub fn run_simple<S: IndexSource>(words: &WordList, source: S) -> io::Result<()> {
    let mut session = Session::new(words, source);
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(&mut session, stdin.lock(), &mut stdout.lock())
}

/// Drive a session from line input
///
/// `quit` exits, `restart` activates the restart control once a round is over, and any
/// other line is fed to the session one character at a time. The view is written after
/// every accepted guess or restart, and nowhere else.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<S, R, W>(session: &mut Session<'_, S>, input: R, out: &mut W) -> io::Result<()>
where
    S: IndexSource,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════╗")?;
    writeln!(out, "║              H A N G M A N           ║")?;
    writeln!(out, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "Type letters to guess. {} mistakes and the round is lost.",
        session.state().max_mistakes()
    )?;
    writeln!(out, "Commands: 'restart' after a round ends, 'quit' to exit\n")?;

    draw(session, out)?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();

        if command.eq_ignore_ascii_case("quit") {
            break;
        }

        if command.eq_ignore_ascii_case("restart") {
            if session.activate_restart() {
                writeln!(out, "\n🔄 New round!")?;
                draw(session, out)?;
            } else {
                writeln!(out, "Finish the round first.")?;
            }
            continue;
        }

        // Case folding is left to the session so only Latin letters become guesses
        for key in command.chars() {
            if session.press(key) {
                draw(session, out)?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(())
}

fn draw<S: IndexSource, W: Write>(session: &Session<'_, S>, out: &mut W) -> io::Result<()> {
    print_view(out, &session.view())
}

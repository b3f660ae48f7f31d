//! TUI application state and event loop

use crate::session::Session;
use crate::wordlists::{IndexSource, WordList};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a, S: IndexSource> {
    pub session: Session<'a, S>,
    pub should_quit: bool,
}

impl<'a, S: IndexSource> App<'a, S> {
    #[must_use]
    pub fn new(words: &'a WordList, source: S) -> Self {
        Self {
            session: Session::new(words, source),
            should_quit: false,
        }
    }

    /// Dispatch a key event; `true` when the screen must be redrawn
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                false
            }
            KeyCode::Esc => {
                self.should_quit = true;
                false
            }
            KeyCode::Enter => self.session.activate_restart(),
            KeyCode::Char(c) => self.session.press(c),
            _ => false,
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: IndexSource>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: IndexSource>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
    terminal.draw(|f| super::rendering::ui(f, &app))?;

    loop {
        let redraw = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Resize(..) => true,
            _ => false,
        };

        if app.should_quit {
            break;
        }

        if redraw {
            terminal.draw(|f| super::rendering::ui(f, &app))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::SequenceIndex;

    fn words() -> WordList {
        WordList::new(vec![
            Word::new("axiom").unwrap(),
            Word::new("cycle").unwrap(),
        ])
        .unwrap()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn letters_become_guesses() {
        let words = words();
        let mut app = App::new(&words, SequenceIndex::new(vec![0]));

        assert!(app.handle_key(key(KeyCode::Char('X'))));
        assert_eq!(app.session.state().guessed().len(), 1);
        assert!(!app.handle_key(key(KeyCode::Char('x'))));
        assert!(!app.handle_key(key(KeyCode::Char('5'))));
        assert!(!app.handle_key(key(KeyCode::Tab)));
        assert_eq!(app.session.state().guessed().len(), 1);
    }

    #[test]
    fn release_events_ignored() {
        let words = words();
        let mut app = App::new(&words, SequenceIndex::new(vec![0]));

        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;

        assert!(!app.handle_key(release));
        assert!(app.session.state().guessed().is_empty());
    }

    #[test]
    fn enter_restarts_only_after_round_ends() {
        let words = words();
        let mut app = App::new(&words, SequenceIndex::new(vec![0, 1]));

        assert!(!app.handle_key(key(KeyCode::Enter)));

        for c in "axiom".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert!(app.session.state().has_won());

        assert!(app.handle_key(key(KeyCode::Enter)));
        assert_eq!(app.session.state().streak(), 1);
        assert_eq!(app.session.state().word().text(), "cycle");
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let words = words();
        let mut app = App::new(&words, SequenceIndex::new(vec![0]));
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = App::new(&words, SequenceIndex::new(vec![0]));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(app.session.state().guessed().is_empty());
    }
}

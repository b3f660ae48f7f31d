//! TUI rendering with ratatui
//!
//! Every call redraws the whole screen from a fresh [`View`].

use super::app::App;
use crate::output::formatters::{ALMOST_LOST_MARK, mistake_list, mistakes_gauge, spaced_slots};
use crate::session::Statistics;
use crate::view::{Banner, RESTART_LABEL, View};
use crate::wordlists::IndexSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Main UI rendering function
///
/// A zero-sized frame has nowhere to draw, so nothing is drawn.
pub fn ui<S: IndexSource>(f: &mut Frame, app: &App<'_, S>) {
    let area = f.area();
    if area.is_empty() {
        return;
    }

    let view = app.session.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Word
            Constraint::Length(3), // Mistakes
            Constraint::Length(3), // Streak
            Constraint::Min(4),    // Banner
            Constraint::Length(1), // Help
        ])
        .split(area);

    render_header(f, chunks[0]);
    render_word(f, &view, chunks[1]);
    render_mistakes(f, &view, chunks[2]);
    render_streak(f, &view, app.session.stats(), chunks[3]);
    render_banner(f, view.banner.as_ref(), chunks[4]);
    render_help(f, &view, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_word(f: &mut Frame, view: &View, area: Rect) {
    let word = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(
            spaced_slots(&view.slots),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .title(" Word ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(word, area);
}

fn render_mistakes(f: &mut Frame, view: &View, area: Rect) {
    let color = if view.almost_lost {
        Color::Red
    } else {
        Color::White
    };

    let mut style = Style::default().fg(color);
    if view.almost_lost {
        style = style.add_modifier(Modifier::BOLD);
    }

    let mut spans = vec![
        Span::raw(format!("Mistakes: {} ", mistake_list(&view.mistakes))),
        Span::raw(format!("({}) ", view.mistake_count)),
        Span::styled(mistakes_gauge(view.mistake_count, view.max_mistakes), style),
    ];
    if view.almost_lost {
        spans.push(Span::styled(format!(" {ALMOST_LOST_MARK}"), style));
    }
    let content = Line::from(spans);

    let mistakes = Paragraph::new(content).style(style).block(
        Block::default()
            .title(" Mistakes ")
            .borders(Borders::ALL)
            .style(Style::default().fg(color)),
    );
    f.render_widget(mistakes, area);
}

fn render_streak(f: &mut Frame, view: &View, stats: &Statistics, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let streak = Paragraph::new(format!("Streak: {}", view.streak))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(streak, chunks[0]);

    let rounds = Paragraph::new(format!(
        "Rounds: {} | Win Rate: {:.0}%",
        stats.rounds_played,
        stats.win_rate()
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(rounds, chunks[1]);

    let best = Paragraph::new(format!("Best streak: {}", stats.best_streak))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(best, chunks[2]);
}

fn render_banner(f: &mut Frame, banner: Option<&Banner>, area: Rect) {
    let Some(banner) = banner else {
        return;
    };

    let color = match banner {
        Banner::Won => Color::Green,
        Banner::Lost { .. } => Color::Red,
    };

    let content = vec![
        Line::from(Span::styled(
            banner.message(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("[ {RESTART_LABEL} ]  (Enter)"),
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(paragraph, area);
}

fn render_help(f: &mut Frame, view: &View, area: Rect) {
    let help_text = if view.banner.is_some() {
        "Enter: Restart | Esc: Quit"
    } else {
        "a-z: Guess a letter | Esc: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::{SequenceIndex, WordList};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn draw<S: IndexSource>(app: &App<'_, S>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app_for<'a>(words: &'a WordList, keys: &str) -> App<'a, SequenceIndex> {
        let mut app = App::new(words, SequenceIndex::new(vec![0]));
        for c in keys.chars() {
            app.session.press(c);
        }
        app
    }

    fn axiom() -> WordList {
        WordList::new(vec![Word::new("axiom").unwrap()]).unwrap()
    }

    #[test]
    fn render_is_idempotent() {
        let words = axiom();
        let app = app_for(&words, "aqx");
        assert_eq!(draw(&app, 80, 24), draw(&app, 80, 24));
    }

    #[test]
    fn render_shows_progress_and_mistakes() {
        let words = axiom();
        let app = app_for(&words, "aq");
        let text = screen_text(&draw(&app, 80, 24));

        assert!(text.contains("a _ _ _ _"));
        assert!(text.contains("Mistakes: q"));
        assert!(text.contains("Streak: 0"));
        assert!(!text.contains(RESTART_LABEL));
    }

    #[test]
    fn render_shows_loss_banner_with_word() {
        let words = axiom();
        let app = app_for(&words, "qwe");
        let text = screen_text(&draw(&app, 80, 24));

        assert!(text.contains("The word was: axiom"));
        assert!(text.contains(RESTART_LABEL));
    }

    #[test]
    fn zero_sized_frame_is_a_no_op() {
        let words = axiom();
        let app = app_for(&words, "a");
        let buffer = draw(&app, 0, 0);
        assert!(buffer.content().is_empty());
    }
}

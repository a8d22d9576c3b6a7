//! TUI rendering with ratatui
//!
//! Layout for the guessing game screen.

use super::app::{App, InputMode, MessageStyle};
use crate::audio::CuePlayer;
use crate::core::{HintType, Outcome};
use crate::output::formatters::{format_seconds, guesses_word, outcome_marker};
use crate::scores::KeyValueStore;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Number of scoreboard rows shown in the side panel
const RECENT_SCORES: usize = 8;

/// Main UI rendering function
pub fn ui<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🌍 GUESS THE COUNTRY")
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

fn render_main_panel<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // History
            Constraint::Length(6), // Hints
            Constraint::Length(3), // Time gauge
        ])
        .split(area);

    render_history(f, app, chunks[0]);
    render_hints(f, app, chunks[1]);
    render_time(f, app, chunks[2]);
}

/// Hue-cycled colors for history rows
const ROW_COLORS: [Color; 6] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightBlue,
    Color::LightMagenta,
];

fn render_history<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let records = app.game.history().records();
    // Keep the newest rows visible
    let visible = usize::from(area.height.saturating_sub(2));
    let skip = records.len().saturating_sub(visible);

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, record)| {
            let result_style = match record.outcome {
                Outcome::Correct => Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
                Outcome::NotFound => Style::default().fg(Color::Red),
                Outcome::Mismatch { .. } => Style::default().add_modifier(Modifier::ITALIC),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>3}. ", i + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    record.guess.clone(),
                    Style::default()
                        .fg(ROW_COLORS[i % ROW_COLORS.len()])
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("  {} ", outcome_marker(record.outcome))),
                Span::styled(record.result.clone(), result_style),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_hints<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let hints = app.game.hints();
    let lines: Vec<Line> = HintType::ALL
        .iter()
        .enumerate()
        .map(|(i, &kind)| {
            let key = format!("F{} ", i + 1);
            match hints.message(kind) {
                Some(text) => Line::from(vec![
                    Span::styled(key, Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("{kind}: ")),
                    Span::styled(
                        format!("{text:?}"),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]),
                None => Line::from(vec![
                    Span::styled(key, Style::default().fg(Color::Yellow)),
                    Span::styled(kind.label(), Style::default().fg(Color::Gray)),
                ]),
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Hints ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(paragraph, area);
}

fn render_time<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let progress = app.game.progress(app.time_window_secs);
    let color = if progress >= 1.0 {
        Color::Red
    } else {
        Color::Cyan
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(progress)
        .label(format!(
            "{} / {}",
            format_seconds(app.game.session().duration()),
            format_seconds(app.time_window_secs as f64)
        ));

    f.render_widget(gauge, area);
}

fn render_info_panel<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Scoreboard
            Constraint::Percentage(50), // Messages
        ])
        .split(area);

    render_scores(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_scores<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let scores = app.game.ledger().scores();
    let items: Vec<ListItem> = if scores.is_empty() {
        vec![ListItem::new("No rounds won yet")]
    } else {
        scores
            .iter()
            .rev()
            .take(RECENT_SCORES)
            .map(|score| {
                ListItem::new(format!(
                    "{}  {:>3} {:<7} {:>5}",
                    score.date.format("%Y-%m-%d"),
                    score.guesses,
                    guesses_word(score.guesses),
                    format_seconds(score.duration)
                ))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Scoreboard ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(list, area);
}

fn render_messages<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 YOU GOT IT! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Country name | Enter: Guess | F1-F4: Hints ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S: KeyValueStore, P: CuePlayer>(f: &mut Frame, app: &App<'_, S, P>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let session = app.game.session();

    let guesses = Paragraph::new(format!("Guesses: {}", session.guess_count()))
        .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let time = Paragraph::new(format!("Time: {}", format_seconds(session.duration())))
        .alignment(Alignment::Center);
    f.render_widget(time, chunks[1]);

    let countries = Paragraph::new(format!("Countries: {}", app.game.catalog().len()))
        .alignment(Alignment::Center);
    f.render_widget(countries, chunks[2]);

    let help_text = if app.input_mode == InputMode::WinCelebration {
        "q: Quit | n: New Game"
    } else {
        "Esc: Quit | Ctrl-N: New Game"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

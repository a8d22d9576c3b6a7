//! TUI application state and logic

use crate::audio::CuePlayer;
use crate::core::{HintType, Outcome};
use crate::game::Game;
use crate::scores::KeyValueStore;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval, so the clock keeps moving without input
const TICK: Duration = Duration::from_millis(250);

/// Messages kept on screen
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: KeyValueStore, P: CuePlayer> {
    pub game: Game<'a, S, P>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub time_window_secs: u64,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: KeyValueStore, P: CuePlayer> App<'a, S, P> {
    #[must_use]
    pub fn new(game: Game<'a, S, P>, time_window_secs: u64) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the country I'm thinking of.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Misses tell you how far away it is alphabetically.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            time_window_secs,
            should_quit: false,
        }
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);

        match self.game.submit(&guess) {
            Some(Outcome::Correct) => {
                let guesses = self.game.session().guess_count();
                let celebration = match guesses {
                    1 => "🎯 FIRST TRY! Extraordinary! 🌟".to_string(),
                    2..=3 => format!("🔥 MAGNIFICENT! Only {guesses} guesses! 🔥"),
                    4..=6 => format!("✨ SPLENDID! {guesses} guesses! ✨"),
                    _ => format!("🎉 You got it in {guesses} guesses! 🎉"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_mode = InputMode::WinCelebration;
            }
            Some(Outcome::NotFound) => {
                self.add_message(
                    &format!("'{}' is not in the country list", guess.trim()),
                    MessageStyle::Error,
                );
            }
            Some(Outcome::Mismatch { .. }) | None => {}
        }
    }

    pub fn use_hint(&mut self, kind: HintType) {
        match self.game.use_hint(kind) {
            Ok(text) => self.add_message(&format!("{kind}: {text}"), MessageStyle::Success),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New round started! Good luck.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// React to one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::F(n @ 1..=4) => self.use_hint(HintType::ALL[usize::from(n) - 1]),
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: KeyValueStore, P: CuePlayer>(app: App<'_, S, P>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, S: KeyValueStore, P: CuePlayer>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S, P>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

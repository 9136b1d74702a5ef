//! TUI application state and logic

use crate::analysis::{SecretSpace, consistent_secrets, suggest};
use crate::game::{Game, GameConfig};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub game: Game,
    pub rng: StdRng,
    /// Every possible secret, enumerated when first needed
    pub space: SecretSpace,
    /// Secrets consistent with the history, refreshed after each change to it
    pub remaining: Option<usize>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Solved,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_guesses_to_win: usize,
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let game = Game::new(config.clone(), &mut rng);
        let space = SecretSpace::new(config.clone());
        let remaining = space.size();

        let mut app = Self {
            config,
            game,
            rng,
            space,
            remaining,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                total_games: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };

        app.add_message(
            &format!(
                "Crack the {}-character code drawn from {}",
                app.config.length(),
                app.config.pool()
            ),
            MessageStyle::Info,
        );
        app.add_message("Type a guess and press Enter. Tab for a hint.", MessageStyle::Info);
        app
    }

    fn refresh_remaining(&mut self) {
        self.remaining = if self.game.history().is_empty() {
            self.space.size()
        } else {
            self.space
                .secrets()
                .map(|secrets| consistent_secrets(self.game.history(), secrets).len())
        };
    }

    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input_buffer);

        match self.game.submit_guess(&text) {
            Ok(guess) => {
                self.refresh_remaining();
                if self.game.is_solved() {
                    let turns = self.game.guess_count();
                    self.stats.games_won += 1;
                    self.stats.total_guesses_to_win += turns;
                    self.input_mode = InputMode::Solved;

                    let celebration = match turns {
                        1 => "🎯 HOLE IN ONE! Extraordinary! 🌟".to_string(),
                        2..=4 => format!("🔥 Cracked in {turns} guesses! 🔥"),
                        _ => format!("🎉 Cracked in {turns} guesses! 🎉"),
                    };
                    self.add_message(&celebration, MessageStyle::Success);
                    self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                } else {
                    self.add_message(&guess.to_string(), MessageStyle::Info);
                }
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                // Keep the rejected text so it can be corrected
                self.input_buffer = text;
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game = Game::new(self.config.clone(), &mut self.rng);
        self.stats.total_games += 1;
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.refresh_remaining();
        debug!(game = self.stats.total_games, "new tui game");
        self.add_message("New game started! New secret drawn.", MessageStyle::Info);
    }

    pub fn reset(&mut self) {
        self.game.reset();
        self.input_buffer.clear();
        self.input_mode = InputMode::Guessing;
        self.refresh_remaining();
        self.add_message("History cleared. Same secret.", MessageStyle::Info);
    }

    pub fn show_hint(&mut self) {
        let Some(secrets) = self.space.secrets() else {
            self.add_message("Too many possible secrets for hints.", MessageStyle::Error);
            return;
        };

        let candidates = consistent_secrets(self.game.history(), secrets);
        let hint = suggest(secrets, &candidates).map(|(guess, metrics)| {
            format!(
                "Try {} ({:.2} bits, worst case {})",
                guess, metrics.entropy, metrics.max_partition
            )
        });

        match hint {
            Some(text) => self.add_message(&text, MessageStyle::Success),
            None => self.add_message("No secret matches the history.", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Handle a key press
    ///
    /// Ctrl+C quits, Ctrl+N draws a new secret, Ctrl+R clears the history.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return;
        }

        match self.input_mode {
            InputMode::Solved => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint(),
                KeyCode::Enter => self.submit_input(),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < self.config.length() {
                        self.input_buffer.push(c);
                    }
                }
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
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key.code, key.modifiers);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn app() -> App {
        App::new(GameConfig::default(), StdRng::seed_from_u64(17))
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn app_starts_guessing() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.remaining, Some(1296));
        assert!(!app.space.is_enumerated());
    }

    #[test]
    fn typing_is_capped_at_code_length() {
        let mut app = app();
        type_text(&mut app, "ABCDEF");
        assert_eq!(app.input_buffer, "ABCD");

        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "ABC");
    }

    #[test]
    fn invalid_guess_keeps_input_and_reports_error() {
        let mut app = app();
        type_text(&mut app, "ABZ");
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_buffer, "ABZ");
        assert!(app.game.history().is_empty());
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("Invalid guess length"));
    }

    #[test]
    fn solving_switches_to_solved_mode() {
        let mut app = app();
        let secret = app.game.secret().to_string();
        type_text(&mut app, &secret);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::Solved);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.remaining, Some(1));

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.total_games, 2);
        assert!(app.game.history().is_empty());
        assert_eq!(app.remaining, Some(1296));
    }

    #[test]
    fn reset_keeps_secret() {
        let mut app = app();
        let secret = app.game.secret().clone();
        let guess = if secret.to_string() == "AAAA" { "BBBB" } else { "AAAA" };
        type_text(&mut app, guess);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.game.guess_count(), 1);
        let after_guess = app.remaining.unwrap();
        assert!((1..1296).contains(&after_guess));

        // Typing does not change the count
        type_text(&mut app, "AB");
        assert_eq!(app.remaining, Some(after_guess));

        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.game.guess_count(), 0);
        assert_eq!(app.game.secret(), &secret);
        assert_eq!(app.remaining, Some(1296));
    }

    #[test]
    fn hint_adds_suggestion_message() {
        let mut app = App::new(
            GameConfig::new("ABC", 3).unwrap(),
            StdRng::seed_from_u64(2),
        );
        assert!(!app.space.is_enumerated());
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Success);
        assert!(last.text.starts_with("Try "));
        assert!(app.space.is_enumerated());
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}

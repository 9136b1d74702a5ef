//! TUI rendering with ratatui
//!
//! Board, search-space gauge, and messages for the Codebreaker interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Guess;
use crate::output::formatters::{CLOSE_PEG, CORRECT_PEG, score_to_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Info
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔐 CODEBREAKER - {} characters from {}",
        app.config.length(),
        app.config.pool()
    );
    let header = Paragraph::new(title)
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

fn peg_spans(guess: &Guess, length: usize) -> Vec<Span<'static>> {
    score_to_pegs(guess.score(), length)
        .chars()
        .map(|peg| {
            let color = match peg {
                CORRECT_PEG => Color::Green,
                CLOSE_PEG => Color::Yellow,
                _ => Color::DarkGray,
            };
            Span::styled(peg.to_string(), Style::default().fg(color))
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let length = app.game.length();
    let history = app.game.history();

    let items: Vec<ListItem> = if history.is_empty() {
        vec![ListItem::new("No guesses yet")]
    } else {
        history
            .iter()
            .enumerate()
            .rev()
            .map(|(i, guess)| {
                let mut spans = vec![
                    Span::styled(format!("{:>3}  ", i + 1), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        guess.text().to_string(),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                ];
                spans.extend(peg_spans(guess, length));
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let board = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Secrets Remaining ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let (Some(total), Some(remaining)) = (app.space.size(), app.remaining) else {
        f.render_widget(Paragraph::new("Search space too large").block(block), area);
        return;
    };

    // Progress is information gained: log(total / remaining) / log(total)
    let ratio = if total > 1 && remaining > 0 {
        1.0 - (remaining as f64).ln() / (total as f64).ln()
    } else {
        1.0
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio.clamp(0.0, 1.0))
        .label(format!("{remaining} of {total} secrets possible"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Solved => (
            " 🎉 CRACKED! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Guessing => (
            " Enter Guess | Enter: submit  Tab: hint ",
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let average = if app.stats.games_won > 0 {
        format!(
            "{:.1}",
            app.stats.total_guesses_to_win as f64 / app.stats.games_won as f64
        )
    } else {
        "-".to_string()
    };

    let status = format!(
        "Games: {} | Won: {} | Avg guesses: {} | Esc: quit  Ctrl+N: new  Ctrl+R: reset",
        app.stats.total_games, app.stats.games_won, average
    );

    let paragraph = Paragraph::new(status)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use rand::{SeedableRng, rngs::StdRng};
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn ui_renders_board_and_status() {
        let mut app = App::new(GameConfig::default(), StdRng::seed_from_u64(5));
        app.input_buffer.push_str("ABCD");
        app.submit_input();

        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|cell| cell.symbol()).collect();

        assert!(text.contains("CODEBREAKER"));
        assert!(text.contains("ABCD"));
        assert!(text.contains("Games: 1"));
    }
}

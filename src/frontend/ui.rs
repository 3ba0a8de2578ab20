//! Stateless ratatui rendering of a [`View`].

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::View;

const HINT: Color = Color::Indexed(241);

/// Renders the header, board and prompt.
pub fn draw(frame: &mut Frame, view: &View, word_list: &str) {
    let board_lines = view.board().lines();
    let board_height = u16::try_from(board_lines.len()).unwrap_or(u16::MAX);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(board_height), // Board
            Constraint::Min(2),               // Prompt
        ])
        .split(frame.area());

    draw_header(frame, chunks[0], word_list);

    let board = Paragraph::new(board_lines.into_iter().map(Line::from).collect::<Vec<_>>());
    frame.render_widget(board, chunks[1]);

    draw_prompt(frame, chunks[2], view);
}

fn draw_header(frame: &mut Frame, area: Rect, word_list: &str) {
    let hint = Style::default().fg(HINT);
    let header = Paragraph::new(vec![
        Line::from(vec![
            Span::raw("Welcome to "),
            Span::styled("Hangman", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw("! A simple little game."),
        ]),
        Line::from(Span::styled(
            format!("Bored of the words? Change {} and add as many words as you want!", word_list),
            hint,
        )),
        Line::from(Span::styled("Close the game by pressing `Ctrl+C`. Thanks for playing!", hint)),
    ]);
    frame.render_widget(header, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, view: &View) {
    let style = if view.prompt().is_rejection() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let prompt = Paragraph::new(Line::from(Span::styled(view.prompt().to_string(), style)))
        .wrap(Wrap { trim: true });
    frame.render_widget(prompt, area);
}

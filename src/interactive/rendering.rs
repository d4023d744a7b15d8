//! TUI rendering with ratatui
//!
//! Draws the title, the letter grid and the status area from a `Snapshot`.

use super::app::App;
use crate::core::{CellFeedback, WORD_LENGTH};
use crate::game::{RoundStatus, Snapshot};
use crate::wordlists::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
};

const GAME_NAME: &str = "Wordle";
const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Title and text shown in the status area
struct StatusMessage {
    title: &'static str,
    text: &'static str,
}

const PLAYING: StatusMessage = StatusMessage {
    title: "Guess the word",
    text: "Type letters, Backspace to correct",
};
const ENTER: StatusMessage = StatusMessage {
    title: "Row complete",
    text: "Press Enter to submit your guess",
};
const WIN: StatusMessage = StatusMessage {
    title: "You won!",
    text: "Enter: new word | Esc: quit",
};
const LOSE: StatusMessage = StatusMessage {
    title: "You lost!",
    text: "Enter: new word | Esc: quit",
};

/// Main UI rendering function
pub fn ui<S: WordSource>(f: &mut Frame, app: &App<S>) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(CELL_HEIGHT),
            Constraint::Length(4), // Status
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, &snapshot, app.show_answer(), chunks[1]);
    render_status(f, &snapshot, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(format!("{GAME_NAME} - {}", env!("CARGO_PKG_VERSION")))
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

fn render_board(f: &mut Frame, snapshot: &Snapshot, reveal_answer: bool, area: Rect) {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CELL_HEIGHT); snapshot.rows()])
        .flex(Flex::Center)
        .split(area);

    let last_row = snapshot.rows() - 1;
    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); WORD_LENGTH])
            .flex(Flex::Center)
            .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let revealed = reveal_answer && row == last_row;
            render_cell(f, snapshot, row, col, revealed, *cell_area);
        }
    }
}

fn render_cell(
    f: &mut Frame,
    snapshot: &Snapshot,
    row: usize,
    col: usize,
    revealed: bool,
    area: Rect,
) {
    let (letter, style) = if revealed {
        (
            Some(snapshot.answer.letter_at(col)),
            Style::default().fg(Color::White).bg(Color::Blue),
        )
    } else {
        (
            snapshot.cell(row, col),
            feedback_style(snapshot.cell_feedback(row, col)),
        )
    };

    // Outline the next writable cell while playing
    let is_cursor = snapshot.status == RoundStatus::Playing
        && snapshot.cursor.row == row
        && snapshot.cursor.col == col;
    let (border_type, border_style) = if is_cursor {
        (
            BorderType::Thick,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        (BorderType::Plain, Style::default().fg(Color::DarkGray))
    };

    let text = letter.map(|l| l.to_string()).unwrap_or_default();
    let cell = Paragraph::new(Line::from(text))
        .alignment(Alignment::Center)
        .style(style.add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(border_type)
                .border_style(border_style),
        );
    f.render_widget(cell, area);
}

fn feedback_style(feedback: CellFeedback) -> Style {
    match feedback {
        CellFeedback::Correct => Style::default().fg(Color::White).bg(Color::Green),
        CellFeedback::Present => Style::default().fg(Color::Black).bg(Color::Yellow),
        CellFeedback::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellFeedback::Unknown => Style::default().fg(Color::White),
    }
}

fn status_message(snapshot: &Snapshot) -> &'static StatusMessage {
    match snapshot.status {
        RoundStatus::Won => &WIN,
        RoundStatus::Lost => &LOSE,
        RoundStatus::Playing if snapshot.awaiting_submit() => &ENTER,
        RoundStatus::Playing => &PLAYING,
    }
}

fn render_status(f: &mut Frame, snapshot: &Snapshot, area: Rect) {
    let message = status_message(snapshot);
    let color = match snapshot.status {
        RoundStatus::Playing => Color::Yellow,
        RoundStatus::Won => Color::Green,
        RoundStatus::Lost => Color::Red,
    };

    let content = vec![
        Line::from(message.title).style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Line::from(message.text).style(Style::default().fg(Color::Gray)),
    ];

    let status = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(color)),
    );
    f.render_widget(status, area);
}

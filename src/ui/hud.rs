use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::game::GameSnapshot;

/// Renders the score line and the key legend below the board.
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &GameSnapshot) {
    let lines = vec![
        score_line(snapshot),
        Line::from(Span::styled(
            "arrows/WASD move  space pause  r reset  +/- speed  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn score_line(snapshot: &GameSnapshot) -> Line<'static> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().fg(Color::White);

    Line::from(vec![
        Span::styled("Score ", label),
        Span::styled(snapshot.score.to_string(), value),
        Span::styled("  Hi ", label),
        Span::styled(snapshot.high_score.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format!("{}ms", snapshot.speed_ms), value),
    ])
}

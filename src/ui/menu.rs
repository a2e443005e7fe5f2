use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};

use crate::game::{GameOverReason, GameSnapshot, GameStatus};

/// Draws the start screen as a centered popup.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, high_score: u32) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let [title_row, body_row] =
        Layout::vertical([Constraint::Length(2), Constraint::Min(3)]).areas(popup);

    frame.render_widget(
        Paragraph::new(Line::from("SNAKE"))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
        title_row,
    );

    let body = vec![
        Line::from(format!("High score: {high_score}")),
        Line::from("[Enter]/arrow Start"),
        Line::from("[Q] Quit"),
    ];
    frame.render_widget(
        Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" start ")),
        body_row,
    );
}

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect) {
    let popup = centered_popup(area, 60, 30);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from("PAUSED"),
        Line::from("[Space]/[Enter] Resume"),
        Line::from("[R] Reset"),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(" pause ")),
        popup,
    );
}

/// Draws the game-over or board-cleared screen as a centered popup.
pub fn render_finished_menu(frame: &mut Frame<'_>, area: Rect, snapshot: &GameSnapshot) {
    let popup = centered_popup(area, 70, 45);
    frame.render_widget(Clear, popup);

    let (title, popup_title) = finished_titles(snapshot.status);
    let lines = vec![
        Line::from(title),
        Line::from(format!("Score: {}", snapshot.score)),
        Line::from(format!("High score: {}", snapshot.high_score)),
        Line::from(match snapshot.game_over_reason {
            Some(GameOverReason::WallCollision) => "Cause: hit wall",
            Some(GameOverReason::SelfCollision) => "Cause: hit yourself",
            None => "",
        }),
        Line::from("[R] Play Again"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(popup_title)),
        popup,
    );
}

fn finished_titles(status: GameStatus) -> (&'static str, &'static str) {
    if status == GameStatus::Victory {
        ("BOARD CLEARED", " victory ")
    } else {
        ("GAME OVER", " game over ")
    }
}

fn centered_popup(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [_, mid, _] = Layout::vertical([
        Constraint::Percentage((100 - height_percent) / 2),
        Constraint::Percentage(height_percent),
        Constraint::Percentage((100 - height_percent) / 2),
    ])
    .areas(area);

    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(mid);

    center
}

#[cfg(test)]
mod tests {
    use crate::game::GameStatus;

    use super::finished_titles;

    #[test]
    fn finished_popup_title_follows_status() {
        assert_eq!(finished_titles(GameStatus::GameOver), ("GAME OVER", " game over "));
        assert_eq!(finished_titles(GameStatus::Victory), ("BOARD CLEARED", " victory "));
    }
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::Block;

use crate::config::GridSize;
use crate::game::{GameSnapshot, GameStatus};
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_finished_menu, render_pause_menu, render_start_menu};

/// Terminal columns per logical cell, so cells render roughly square.
const CELL_WIDTH: u16 = 2;

const GLYPH_FOOD: &str = "●";
const GLYPH_SNAKE_BODY: &str = "██";
const GLYPH_SNAKE_HEAD_UP: &str = "▲▲";
const GLYPH_SNAKE_HEAD_DOWN: &str = "▼▼";
const GLYPH_SNAKE_HEAD_LEFT: &str = "◀◀";
const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶▶";
const GLYPH_SNAKE_HEAD_IDLE: &str = "██";

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &GameSnapshot) {
    let area = frame.area();
    let board = board_area(area, snapshot.grid_size);
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Length(board.height), Constraint::Length(2)])
            .areas(Rect {
                height: area.height.min(board.height + 2),
                ..board
            });

    let block = Block::bordered().border_style(Style::new().fg(Color::DarkGray));
    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_food(frame, inner, snapshot);
    render_snake(frame, inner, snapshot);
    render_hud(frame, hud_area, snapshot);

    match snapshot.status {
        GameStatus::Idle => render_start_menu(frame, play_area, snapshot.high_score),
        GameStatus::Paused => render_pause_menu(frame, play_area),
        GameStatus::GameOver | GameStatus::Victory => {
            render_finished_menu(frame, play_area, snapshot);
        }
        GameStatus::Playing => {}
    }
}

fn board_area(area: Rect, bounds: GridSize) -> Rect {
    let width = (bounds.side().saturating_mul(CELL_WIDTH) + 2).min(area.width);
    let height = (bounds.side() + 2).min(area.height.saturating_sub(2));
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height,
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &GameSnapshot) {
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, snapshot.food) else {
        return;
    };

    let buffer = frame.buffer_mut();
    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(Color::Red));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &GameSnapshot) {
    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, *segment) else {
            continue;
        };

        if index == 0 {
            buffer.set_string(
                x,
                y,
                head_glyph(snapshot.direction),
                Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
            );
        } else {
            buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(Color::Green));
        }
    }
}

fn head_glyph(direction: Option<Direction>) -> &'static str {
    match direction {
        Some(Direction::Up) => GLYPH_SNAKE_HEAD_UP,
        Some(Direction::Down) => GLYPH_SNAKE_HEAD_DOWN,
        Some(Direction::Left) => GLYPH_SNAKE_HEAD_LEFT,
        Some(Direction::Right) => GLYPH_SNAKE_HEAD_RIGHT,
        None => GLYPH_SNAKE_HEAD_IDLE,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x_offset = u16::try_from(position.x).ok()?.saturating_mul(CELL_WIDTH);
    let y_offset = u16::try_from(position.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x + CELL_WIDTH > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

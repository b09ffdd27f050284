//! Arena layout: brick grid placement, row colors, paddle start
//!
//! Deterministic given the config; the only randomness is the color of rows
//! past the tenth.

use glam::Vec2;
use rand::Rng;

use super::geometry::Rect;
use super::state::{Brick, Color};
use crate::config::GameConfig;

/// X coordinate of the first brick in a row.
///
/// Any space left over after `count` bricks and their separators is split
/// evenly on both sides; a row that fills or overflows the arena starts at 0.
pub fn brick_row_origin(arena_width: f32, brick_width: f32, count: u32, sep: f32) -> f32 {
    let n = count as f32;
    let row_width = n * brick_width + (n - 1.0).max(0.0) * sep;
    let remaining = arena_width - row_width;
    if remaining > 0.0 { remaining / 2.0 } else { 0.0 }
}

/// Color of a brick row (1-based, counted from the top).
///
/// Rows come in pairs: red, orange, yellow, green, cyan. Anything past row 10
/// gets a random color.
pub fn row_color<R: Rng + ?Sized>(row: u32, rng: &mut R) -> Color {
    match row {
        1 | 2 => Color::Red,
        3 | 4 => Color::Orange,
        5 | 6 => Color::Yellow,
        7 | 8 => Color::Green,
        9 | 10 => Color::Cyan,
        _ => Color::Rgb(rng.random(), rng.random(), rng.random()),
    }
}

/// Lay out the full brick grid, top row first, row-major.
pub fn build_brick_grid<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Vec<Brick> {
    let x0 = brick_row_origin(
        config.arena_width,
        config.brick_width,
        config.bricks_per_row,
        config.brick_sep,
    );
    let mut bricks = Vec::with_capacity((config.brick_rows * config.bricks_per_row) as usize);

    let mut y = config.brick_y_offset;
    for row in 1..=config.brick_rows {
        let color = row_color(row, rng);
        let mut x = x0;
        for _ in 0..config.bricks_per_row {
            bricks.push(Brick {
                rect: Rect::new(x, y, config.brick_width, config.brick_height),
                color,
                alive: true,
            });
            x += config.brick_width + config.brick_sep;
        }
        y += config.brick_height + config.brick_sep;
    }

    bricks
}

/// Top-left of the paddle at the start of a turn: horizontally centred,
/// `y_offset` up from the bottom edge.
pub fn initial_paddle_position(
    arena_width: f32,
    arena_height: f32,
    paddle_width: f32,
    y_offset: f32,
) -> Vec2 {
    Vec2::new(arena_width / 2.0 - paddle_width / 2.0, arena_height - y_offset)
}

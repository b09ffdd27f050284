//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only, passed in by the caller
//! - Stable iteration order (bricks in row-major order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::{Collider, find_collider, paddle_surface, resolve};
pub use geometry::{Rect, probe_corners, rect_contains};
pub use input::{InputTracker, autopilot_pointer};
pub use layout::{brick_row_origin, build_brick_grid, initial_paddle_position, row_color};
pub use state::{
    Arena, Ball, Brick, Color, GameEvent, Paddle, PaddleSurface, Playfield, TurnOver, TurnState,
    Wall,
};
pub use tick::{TickOutcome, bounce_off_walls, check_turn_over, tick};

//! Breakout - A classic brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, layout, collisions, ticks)
//! - `game`: Turn/game controller and the paced tick driver
//! - `render`: Drawing surface the controller reports into
//! - `config`: Data-driven arena and physics settings

pub mod config;
pub mod error;
pub mod game;
pub mod render;
pub mod sim;

pub use config::GameConfig;
pub use error::ConfigError;
pub use game::{Game, GamePhase, GameReport};

/// Reference game constants (defaults for [`GameConfig`])
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 400.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 60.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Offset of the paddle's top edge up from the bottom
    pub const PADDLE_Y_OFFSET: f32 = 30.0;

    /// Brick grid defaults
    pub const NBRICKS_PER_ROW: u32 = 10;
    pub const NBRICK_ROWS: u32 = 10;
    pub const BRICK_SEP: f32 = 4.0;
    /// (ARENA_WIDTH - (NBRICKS_PER_ROW - 1) * BRICK_SEP) / NBRICKS_PER_ROW, truncated
    pub const BRICK_WIDTH: f32 = 36.0;
    pub const BRICK_HEIGHT: f32 = 8.0;
    /// Offset of the top brick row from the top
    pub const BRICK_Y_OFFSET: f32 = 70.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 10.0;
    /// Horizontal speed magnitude range (units/tick)
    pub const BALL_VX_MIN: f32 = 1.0;
    pub const BALL_VX_MAX: f32 = 3.0;
    /// Initial downward speed (units/tick)
    pub const BALL_VY: f32 = 3.0;

    /// Number of turns (lives)
    pub const NTURNS: u32 = 3;

    /// Pause between ticks (~24 updates per second)
    pub const TICK_MILLIS: u64 = 42;
}

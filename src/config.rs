//! Game configuration
//!
//! Every field defaults to the matching constant in [`crate::consts`]; a JSON
//! file can override any subset of them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Arena, entity and physics settings for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Distance from the bottom edge to the paddle's top edge
    pub paddle_y_offset: f32,

    // === Bricks ===
    pub bricks_per_row: u32,
    pub brick_rows: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_sep: f32,
    /// Distance from the top edge to the first row
    pub brick_y_offset: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Lower bound of the horizontal speed magnitude
    pub vx_min: f32,
    /// Upper bound of the horizontal speed magnitude
    pub vx_max: f32,
    /// Initial downward speed
    pub vy: f32,

    // === Game ===
    pub turns: u32,
    /// Pause between ticks in milliseconds (0 runs flat out)
    pub tick_millis: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_y_offset: PADDLE_Y_OFFSET,

            bricks_per_row: NBRICKS_PER_ROW,
            brick_rows: NBRICK_ROWS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_sep: BRICK_SEP,
            brick_y_offset: BRICK_Y_OFFSET,

            ball_radius: BALL_RADIUS,
            vx_min: BALL_VX_MIN,
            vx_max: BALL_VX_MAX,
            vy: BALL_VY,

            turns: NTURNS,
            tick_millis: TICK_MILLIS,
        }
    }
}

impl GameConfig {
    /// Pause between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }

    /// Width of one brick row including the separators between bricks
    pub fn brick_row_width(&self) -> f32 {
        let n = self.bricks_per_row as f32;
        n * self.brick_width + (n - 1.0) * self.brick_sep
    }

    /// Y coordinate just below the last brick row
    pub fn brick_grid_bottom(&self) -> f32 {
        let rows = self.brick_rows as f32;
        self.brick_y_offset + rows * self.brick_height + (rows - 1.0) * self.brick_sep
    }

    /// Reject layouts that would place entities outside the arena
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
            ("ball_radius", self.ball_radius),
            ("vx_min", self.vx_min),
            ("vy", self.vy),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::invalid(field, format!("must be positive, got {value}")));
            }
        }

        if !(self.brick_sep.is_finite() && self.brick_sep >= 0.0) {
            return Err(ConfigError::invalid("brick_sep", "must not be negative"));
        }
        if !(self.brick_y_offset.is_finite() && self.brick_y_offset >= 0.0) {
            return Err(ConfigError::invalid("brick_y_offset", "must not be negative"));
        }
        if self.bricks_per_row == 0 {
            return Err(ConfigError::invalid("bricks_per_row", "must be at least 1"));
        }
        if self.brick_rows == 0 {
            return Err(ConfigError::invalid("brick_rows", "must be at least 1"));
        }
        if self.turns == 0 {
            return Err(ConfigError::invalid("turns", "must be at least 1"));
        }
        if !self.vx_max.is_finite() || self.vx_min > self.vx_max {
            return Err(ConfigError::invalid(
                "vx_max",
                format!("must be at least vx_min ({})", self.vx_min),
            ));
        }

        let needed = self.brick_row_width();
        if needed > self.arena_width {
            return Err(ConfigError::GridTooWide {
                needed,
                available: self.arena_width,
            });
        }

        if self.paddle_width > self.arena_width {
            return Err(ConfigError::invalid("paddle_width", "wider than the arena"));
        }
        if self.paddle_y_offset < self.paddle_height || self.paddle_y_offset > self.arena_height {
            return Err(ConfigError::invalid(
                "paddle_y_offset",
                format!(
                    "must lie within [{}, {}]",
                    self.paddle_height, self.arena_height
                ),
            ));
        }
        if self.brick_grid_bottom() >= self.arena_height - self.paddle_y_offset {
            return Err(ConfigError::invalid("brick_rows", "brick grid reaches the paddle"));
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= self.arena_width || diameter >= self.arena_height {
            return Err(ConfigError::invalid("ball_radius", "ball does not fit in the arena"));
        }

        Ok(())
    }

    /// Parse a JSON config and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file, falling back to defaults when it is missing or bad
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No {} found, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; using defaults");
                Self::default()
            }
        }
    }
}

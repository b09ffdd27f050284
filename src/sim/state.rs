//! Entity state for one turn
//!
//! Everything the tick loop and the input handler touch lives in [`Playfield`],
//! which the controller owns and rebuilds at the start of every turn.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::Rect;
use super::layout;
use crate::config::GameConfig;

/// Fixed arena bounds (origin top-left, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Display colors for entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Rgb(u8, u8, u8),
}

/// The ball. `pos` is the top-left of its bounding square.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Ball centred in the arena with a fresh serve velocity: downward at
    /// `vy`, horizontal magnitude drawn from `[vx_min, vx_max]` with a fair
    /// coin for the direction.
    pub fn serve<R: Rng + ?Sized>(arena: &Arena, config: &GameConfig, rng: &mut R) -> Self {
        let radius = config.ball_radius;
        let mut vx = random_speed(rng, config.vx_min, config.vx_max);
        if rng.random_bool(0.5) {
            vx = -vx;
        }
        Self {
            pos: arena.center() - Vec2::splat(radius),
            vel: Vec2::new(vx, config.vy),
            radius,
        }
    }

    /// Side of the bounding square
    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Bounding square used for all collision probes
    pub fn bounds(&self) -> Rect {
        Rect::square(self.pos, self.diameter())
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Move by one tick of velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Reverse horizontal direction with a freshly drawn magnitude
    pub fn bounce_x<R: Rng + ?Sized>(&mut self, rng: &mut R, vx_min: f32, vx_max: f32) {
        let magnitude = random_speed(rng, vx_min, vx_max);
        self.vel.x = if self.vel.x > 0.0 { -magnitude } else { magnitude };
    }

    /// Reverse vertical direction, keeping the magnitude
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
    }
}

/// Uniform draw from `[min, max]`
fn random_speed<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    if min >= max {
        min
    } else {
        rng.random_range(min..=max)
    }
}

/// The player's paddle. Only `pos.x` changes during a turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Paddle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(width, height),
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move horizontally by `delta`, all or nothing.
    ///
    /// A move that would push the left edge below 0 or the right edge past
    /// `arena_width` is discarded entirely rather than stopped at the wall.
    /// Returns whether the move was applied.
    pub fn try_move(&mut self, delta: f32, arena_width: f32) -> bool {
        let allowed = if delta < 0.0 {
            self.pos.x + delta >= 0.0
        } else if delta > 0.0 {
            self.pos.x + self.size.x + delta <= arena_width
        } else {
            false
        };
        if allowed {
            self.pos.x += delta;
        }
        allowed
    }
}

/// A single destructible brick
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: Color,
    pub alive: bool,
}

/// Per-turn bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnState {
    /// Current turn index (0-based)
    pub turn: u32,
    /// Number of alive bricks; only ever decreases within a turn
    pub remaining_bricks: u32,
    /// Ticks simulated so far this turn
    pub ticks: u64,
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// Which part of the paddle the ball struck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaddleSurface {
    Top,
    Side,
}

/// Why a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOver {
    /// Every brick was destroyed
    Cleared,
    /// The ball fell past the bottom edge
    BallLost,
}

/// Observable things that happened during a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce(Wall),
    PaddleBounce { surface: PaddleSurface },
    BrickDestroyed { index: usize, color: Color },
}

/// All mutable entity state for one turn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playfield {
    pub arena: Arena,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Brick grid in row-major order
    pub bricks: Vec<Brick>,
    pub turn: TurnState,
}

impl Playfield {
    /// Build a fresh arena for the given turn: full brick grid, centred
    /// paddle, served ball.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, turn: u32, rng: &mut R) -> Self {
        let arena = Arena::new(config.arena_width, config.arena_height);
        let bricks = layout::build_brick_grid(config, rng);
        let paddle_pos = layout::initial_paddle_position(
            arena.width,
            arena.height,
            config.paddle_width,
            config.paddle_y_offset,
        );
        let paddle = Paddle::new(paddle_pos, config.paddle_width, config.paddle_height);
        let ball = Ball::serve(&arena, config, rng);

        Self {
            arena,
            ball,
            paddle,
            turn: TurnState {
                turn,
                remaining_bricks: bricks.len() as u32,
                ticks: 0,
            },
            bricks,
        }
    }

    /// Number of bricks still in play
    pub fn alive_bricks(&self) -> usize {
        self.bricks.iter().filter(|b| b.alive).count()
    }

    /// Mark a brick dead. Returns false if it was already dead.
    pub fn destroy_brick(&mut self, index: usize) -> bool {
        match self.bricks.get_mut(index) {
            Some(brick) if brick.alive => {
                brick.alive = false;
                self.turn.remaining_bricks = self.turn.remaining_bricks.saturating_sub(1);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_serve_is_centred_and_downward() {
        let config = GameConfig::default();
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let ball = Ball::serve(&arena, &config, &mut rng);
            assert_eq!(ball.center(), Vec2::new(200.0, 300.0));
            assert_eq!(ball.vel.y, config.vy);
            let speed = ball.vel.x.abs();
            assert!((config.vx_min..=config.vx_max).contains(&speed));
        }
    }

    #[test]
    fn test_serve_direction_uses_both_signs() {
        let config = GameConfig::default();
        let arena = Arena::new(config.arena_width, config.arena_height);
        let mut rng = Pcg32::seed_from_u64(11);
        let serves: Vec<f32> = (0..64)
            .map(|_| Ball::serve(&arena, &config, &mut rng).vel.x)
            .collect();
        assert!(serves.iter().any(|vx| *vx < 0.0));
        assert!(serves.iter().any(|vx| *vx > 0.0));
    }

    #[test]
    fn test_bounce_x_flips_sign_and_redraws() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut ball = Ball {
            pos: Vec2::ZERO,
            vel: Vec2::new(-2.0, 3.0),
            radius: 10.0,
        };
        ball.bounce_x(&mut rng, 1.0, 3.0);
        assert!(ball.vel.x >= 1.0 && ball.vel.x <= 3.0);
        ball.bounce_x(&mut rng, 1.0, 3.0);
        assert!(ball.vel.x <= -1.0 && ball.vel.x >= -3.0);
        assert_eq!(ball.vel.y, 3.0);
    }

    #[test]
    fn test_try_move_all_or_nothing() {
        let mut paddle = Paddle::new(Vec2::new(5.0, 570.0), 60.0, 10.0);

        // Would overshoot the left wall: rejected, not truncated to 0
        assert!(!paddle.try_move(-6.0, 400.0));
        assert_eq!(paddle.pos.x, 5.0);

        // Exactly reaching the wall is fine
        assert!(paddle.try_move(-5.0, 400.0));
        assert_eq!(paddle.pos.x, 0.0);

        paddle.pos.x = 330.0;
        assert!(!paddle.try_move(11.0, 400.0));
        assert_eq!(paddle.pos.x, 330.0);
        assert!(paddle.try_move(10.0, 400.0));
        assert_eq!(paddle.rect().right(), 400.0);

        assert!(!paddle.try_move(0.0, 400.0));
    }

    #[test]
    fn test_destroy_brick_once() {
        let config = GameConfig::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut field = Playfield::new(&config, 0, &mut rng);
        assert_eq!(field.turn.remaining_bricks, 100);

        assert!(field.destroy_brick(42));
        assert!(!field.destroy_brick(42));
        assert!(!field.destroy_brick(1000));
        assert_eq!(field.turn.remaining_bricks, 99);
        assert_eq!(field.alive_bricks(), 99);
    }
}

//! Fixed-step simulation tick
//!
//! One call advances the ball by one step of its velocity, resolves at most
//! one collision, and reports whether the turn is over.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collision::{find_collider, resolve};
use super::state::{Arena, Ball, GameEvent, Playfield, TurnOver, Wall};
use crate::config::GameConfig;

/// Everything observable about a single tick
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TickOutcome {
    pub events: Vec<GameEvent>,
    /// Set when this tick ended the turn
    pub turn_over: Option<TurnOver>,
    /// How far the ball actually moved
    pub ball_delta: Vec2,
}

/// Advance the playfield by one tick
pub fn tick<R: Rng + ?Sized>(
    field: &mut Playfield,
    config: &GameConfig,
    rng: &mut R,
) -> TickOutcome {
    field.turn.ticks += 1;
    let start = field.ball.pos;
    field.ball.advance();

    let mut outcome = TickOutcome::default();

    // Walls take priority; a wall bounce skips object collisions this tick
    let wall = bounce_off_walls(
        &mut field.ball,
        &field.arena,
        config.vx_min,
        config.vx_max,
        rng,
    );
    if let Some(wall) = wall {
        log::debug!("Wall bounce {:?}, vel now {:?}", wall, field.ball.vel);
        outcome.events.push(GameEvent::WallBounce(wall));
    } else if let Some(collider) = find_collider(field) {
        if let Some(event) = resolve(field, collider, config.vx_min, config.vx_max, rng) {
            outcome.events.push(event);
        }
    }

    outcome.turn_over = check_turn_over(field);
    outcome.ball_delta = field.ball.pos - start;
    outcome
}

/// Reflect the ball off the first wall it is pushing into.
///
/// Side walls re-draw the horizontal speed; the top wall only negates the
/// vertical speed. Each check also requires the ball to be moving toward the
/// wall, so a ball still overlapping a wall after reflecting is left alone.
pub fn bounce_off_walls<R: Rng + ?Sized>(
    ball: &mut Ball,
    arena: &Arena,
    vx_min: f32,
    vx_max: f32,
    rng: &mut R,
) -> Option<Wall> {
    let bounds = ball.bounds();
    if bounds.left() <= 0.0 && ball.vel.x < 0.0 {
        ball.bounce_x(rng, vx_min, vx_max);
        Some(Wall::Left)
    } else if bounds.right() >= arena.width && ball.vel.x > 0.0 {
        ball.bounce_x(rng, vx_min, vx_max);
        Some(Wall::Right)
    } else if bounds.top() <= 0.0 && ball.vel.y < 0.0 {
        ball.bounce_y();
        Some(Wall::Top)
    } else {
        None
    }
}

/// Turn-over predicate: all bricks gone, or the ball past the bottom edge
pub fn check_turn_over(field: &Playfield) -> Option<TurnOver> {
    if field.turn.remaining_bricks == 0 {
        Some(TurnOver::Cleared)
    } else if field.ball.bounds().bottom() >= field.arena.height {
        Some(TurnOver::BallLost)
    } else {
        None
    }
}

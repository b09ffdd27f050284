//! Ball-object collision detection and response
//!
//! The ball is round but collides as its bounding square: each of the four
//! corners is probed against the paddle and the live bricks, and the first
//! corner that lands inside something decides what was hit.

use rand::Rng;

use super::geometry::{Rect, probe_corners};
use super::state::{Ball, GameEvent, PaddleSurface, Playfield};

/// What the ball ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collider {
    Paddle,
    /// Index into [`Playfield::bricks`]
    Brick(usize),
}

/// Probe the ball's corners in order (top-left, top-right, bottom-left,
/// bottom-right) and return the first object found under one of them.
pub fn find_collider(field: &Playfield) -> Option<Collider> {
    let paddle = field.paddle.rect();
    probe_corners(field.ball.pos, field.ball.diameter())
        .into_iter()
        .find_map(|corner| {
            if paddle.contains(corner) {
                return Some(Collider::Paddle);
            }
            field
                .bricks
                .iter()
                .position(|brick| brick.alive && brick.rect.contains(corner))
                .map(Collider::Brick)
        })
}

/// Classify a paddle contact.
///
/// It is a top-surface hit when the ball overlaps the paddle horizontally and
/// its bottom edge sits between the paddle's top edge and one tick of
/// vertical travel below it. Anything deeper came in from the side.
pub fn paddle_surface(ball: &Ball, paddle: &Rect) -> PaddleSurface {
    let bounds = ball.bounds();
    let depth = bounds.bottom() - paddle.top();
    if bounds.overlaps_horizontally(paddle) && depth >= 0.0 && depth <= ball.vel.y.abs() {
        PaddleSurface::Top
    } else {
        PaddleSurface::Side
    }
}

/// Apply the response for a collision. Returns an event if anything changed.
pub fn resolve<R: Rng + ?Sized>(
    field: &mut Playfield,
    collider: Collider,
    vx_min: f32,
    vx_max: f32,
    rng: &mut R,
) -> Option<GameEvent> {
    match collider {
        Collider::Paddle => {
            let paddle = field.paddle.rect();
            let ball = &mut field.ball;
            match paddle_surface(ball, &paddle) {
                PaddleSurface::Top => {
                    // Still overlapping after a bounce: already heading up
                    if ball.vel.y <= 0.0 {
                        return None;
                    }
                    ball.bounce_y();
                    log::debug!("Paddle bounce at x={:.1}", ball.center().x);
                    Some(GameEvent::PaddleBounce {
                        surface: PaddleSurface::Top,
                    })
                }
                PaddleSurface::Side => {
                    let dx = paddle.center().x - ball.center().x;
                    if dx * ball.vel.x <= 0.0 {
                        return None;
                    }
                    ball.bounce_x(rng, vx_min, vx_max);
                    log::debug!("Paddle side clip, vx now {:.2}", ball.vel.x);
                    Some(GameEvent::PaddleBounce {
                        surface: PaddleSurface::Side,
                    })
                }
            }
        }
        Collider::Brick(index) => {
            if !field.destroy_brick(index) {
                return None;
            }
            field.ball.bounce_y();
            let color = field.bricks[index].color;
            log::debug!(
                "Brick {} destroyed, {} remaining",
                index,
                field.turn.remaining_bricks
            );
            Some(GameEvent::BrickDestroyed { index, color })
        }
    }
}

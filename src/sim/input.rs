//! Pointer tracking for the paddle
//!
//! The paddle follows pointer *movement*, not pointer position: each event
//! moves the paddle by the distance the pointer travelled since the last one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Playfield;

/// Last pointer position seen, for computing per-event deltas
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputTracker {
    pub last_pos: Vec2,
}

impl InputTracker {
    /// Re-anchor tracking at the paddle's starting point
    pub fn reset(&mut self, paddle_start: Vec2) {
        self.last_pos = paddle_start;
    }

    /// Handle a pointer move event.
    ///
    /// Requests a paddle move of the horizontal delta, then records the new
    /// position whether or not the move was applied. Returns the applied
    /// delta, if any.
    pub fn on_pointer_move(&mut self, field: &mut Playfield, pos: Vec2) -> Option<f32> {
        let delta = pos.x - self.last_pos.x;
        let applied = field.paddle.try_move(delta, field.arena.width);
        self.last_pos = pos;
        applied.then_some(delta)
    }
}

/// Demo-mode pointer: aims the paddle's centre at the ball's centre.
///
/// Returns the pointer position that would produce that move given the
/// tracker's current anchor.
pub fn autopilot_pointer(field: &Playfield, tracker: &InputTracker) -> Vec2 {
    let paddle_center = field.paddle.rect().center().x;
    let delta = field.ball.center().x - paddle_center;
    Vec2::new(tracker.last_pos.x + delta, tracker.last_pos.y)
}

//! Drawing surface the controller reports into
//!
//! The simulation never draws. The controller mirrors every visible change
//! (entities created at turn start, ball and paddle motion, brick removal)
//! onto a [`Canvas`], which a real front end implements.

use std::collections::BTreeMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Color;

/// Opaque id for a drawn brick, handed back for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BrickHandle(pub u32);

/// Render collaborator contract
pub trait Canvas {
    fn draw_paddle(&mut self, pos: Vec2, size: Vec2, color: Color);
    fn move_paddle_by(&mut self, delta: Vec2);
    fn draw_ball(&mut self, pos: Vec2, radius: f32, color: Color);
    fn move_ball_by(&mut self, delta: Vec2);
    fn draw_brick(&mut self, pos: Vec2, size: Vec2, color: Color) -> BrickHandle;
    fn remove_brick(&mut self, handle: BrickHandle);
    /// Drop everything on screen (end of a turn)
    fn clear(&mut self);
}

/// Canvas that draws nothing
#[derive(Debug, Default)]
pub struct NullCanvas {
    next_handle: u32,
}

impl Canvas for NullCanvas {
    fn draw_paddle(&mut self, _pos: Vec2, _size: Vec2, _color: Color) {}
    fn move_paddle_by(&mut self, _delta: Vec2) {}
    fn draw_ball(&mut self, _pos: Vec2, _radius: f32, _color: Color) {}
    fn move_ball_by(&mut self, _delta: Vec2) {}

    fn draw_brick(&mut self, _pos: Vec2, _size: Vec2, _color: Color) -> BrickHandle {
        let handle = BrickHandle(self.next_handle);
        self.next_handle += 1;
        handle
    }

    fn remove_brick(&mut self, _handle: BrickHandle) {}
    fn clear(&mut self) {}
}

/// Headless canvas that keeps a copy of the scene and traces every call.
///
/// Used by the demo binary and by tests to check the controller keeps the
/// picture in step with the simulation.
#[derive(Debug, Default)]
pub struct SceneCanvas {
    pub paddle: Option<Vec2>,
    pub ball: Option<Vec2>,
    pub bricks: BTreeMap<BrickHandle, (Vec2, Color)>,
    /// Number of `remove_brick` calls, including bogus handles
    pub removals: u32,
    next_handle: u32,
}

impl SceneCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brick_count(&self) -> usize {
        self.bricks.len()
    }
}

impl Canvas for SceneCanvas {
    fn draw_paddle(&mut self, pos: Vec2, size: Vec2, color: Color) {
        log::trace!("draw paddle at {pos:?} size {size:?} {color:?}");
        self.paddle = Some(pos);
    }

    fn move_paddle_by(&mut self, delta: Vec2) {
        log::trace!("move paddle by {delta:?}");
        if let Some(pos) = self.paddle.as_mut() {
            *pos += delta;
        }
    }

    fn draw_ball(&mut self, pos: Vec2, radius: f32, color: Color) {
        log::trace!("draw ball at {pos:?} radius {radius} {color:?}");
        self.ball = Some(pos);
    }

    fn move_ball_by(&mut self, delta: Vec2) {
        if let Some(pos) = self.ball.as_mut() {
            *pos += delta;
        }
    }

    fn draw_brick(&mut self, pos: Vec2, _size: Vec2, color: Color) -> BrickHandle {
        let handle = BrickHandle(self.next_handle);
        self.next_handle += 1;
        self.bricks.insert(handle, (pos, color));
        handle
    }

    fn remove_brick(&mut self, handle: BrickHandle) {
        log::trace!("remove brick {handle:?}");
        self.removals += 1;
        if self.bricks.remove(&handle).is_none() {
            log::warn!("remove_brick: unknown handle {handle:?}");
        }
    }

    fn clear(&mut self) {
        log::trace!("clear canvas");
        self.paddle = None;
        self.ball = None;
        self.bricks.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_canvas_tracks_bricks() {
        let mut canvas = SceneCanvas::new();
        let a = canvas.draw_brick(Vec2::ZERO, Vec2::new(36.0, 8.0), Color::Red);
        let b = canvas.draw_brick(Vec2::new(40.0, 0.0), Vec2::new(36.0, 8.0), Color::Red);
        assert_ne!(a, b);
        assert_eq!(canvas.brick_count(), 2);

        canvas.remove_brick(a);
        assert_eq!(canvas.brick_count(), 1);
        assert!(canvas.bricks.contains_key(&b));

        canvas.clear();
        assert_eq!(canvas.brick_count(), 0);
        assert_eq!(canvas.removals, 1);
    }

    #[test]
    fn test_scene_canvas_moves() {
        let mut canvas = SceneCanvas::new();
        // Moves before anything is drawn are ignored
        canvas.move_ball_by(Vec2::ONE);
        assert_eq!(canvas.ball, None);

        canvas.draw_ball(Vec2::new(190.0, 290.0), 10.0, Color::Black);
        canvas.move_ball_by(Vec2::new(2.0, 3.0));
        assert_eq!(canvas.ball, Some(Vec2::new(192.0, 293.0)));

        canvas.draw_paddle(Vec2::new(170.0, 570.0), Vec2::new(60.0, 10.0), Color::Black);
        canvas.move_paddle_by(Vec2::new(-20.0, 0.0));
        assert_eq!(canvas.paddle, Some(Vec2::new(150.0, 570.0)));
    }
}

//! Turn and game controller
//!
//! Owns the config, the seeded RNG, the current [`Playfield`] and the canvas.
//! A game runs a fixed number of turns; each turn gets a freshly built arena
//! and ends when the bricks are cleared or the ball is lost.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::render::{BrickHandle, Canvas};
use crate::sim::{self, Color, GameEvent, InputTracker, Playfield, TickOutcome, TurnOver};

/// Where the game is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    NotStarted,
    /// Turn index is 0-based
    Playing { turn: u32 },
    /// Terminal; ticks are ignored
    Finished,
}

/// Result of one finished turn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TurnResult {
    pub turn: u32,
    pub outcome: TurnOver,
    pub ticks: u64,
    pub bricks_destroyed: u32,
}

/// Running totals for a game
#[derive(Debug, Clone, Default, Serialize)]
pub struct GameReport {
    pub seed: u64,
    pub turns: Vec<TurnResult>,
    /// Ticks actually simulated
    pub ticks: u64,
    pub bricks_destroyed: u32,
    pub wall_bounces: u32,
    pub paddle_bounces: u32,
}

impl GameReport {
    pub fn turns_cleared(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.outcome == TurnOver::Cleared)
            .count()
    }

    pub fn turns_lost(&self) -> usize {
        self.turns
            .iter()
            .filter(|t| t.outcome == TurnOver::BallLost)
            .count()
    }
}

const PADDLE_COLOR: Color = Color::Black;
const BALL_COLOR: Color = Color::Black;

/// The game controller
pub struct Game<C: Canvas> {
    config: GameConfig,
    seed: u64,
    rng: Pcg32,
    canvas: C,
    phase: GamePhase,
    field: Option<Playfield>,
    input: InputTracker,
    /// Canvas handles, parallel to `Playfield::bricks`
    brick_handles: Vec<BrickHandle>,
    report: GameReport,
}

impl<C: Canvas> Game<C> {
    /// Validate the config and set up a game that has not started yet
    pub fn new(config: GameConfig, seed: u64, canvas: C) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            canvas,
            phase: GamePhase::NotStarted,
            field: None,
            input: InputTracker::default(),
            brick_handles: Vec::new(),
            report: GameReport {
                seed,
                ..Default::default()
            },
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Current turn's entities (None outside `Playing`)
    pub fn field(&self) -> Option<&Playfield> {
        self.field.as_ref()
    }

    /// Mutable access to the current turn's entities, for scripted setups
    pub fn field_mut(&mut self) -> Option<&mut Playfield> {
        self.field.as_mut()
    }

    pub fn input(&self) -> &InputTracker {
        &self.input
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn report(&self) -> &GameReport {
        &self.report
    }

    /// Build the arena for turn 0 and start playing. Ignored unless the game
    /// has not started yet.
    pub fn start_game(&mut self) {
        if self.phase != GamePhase::NotStarted {
            log::warn!("start_game called in phase {:?}; ignoring", self.phase);
            return;
        }
        log::info!(
            "Starting game: {} turns, seed {}",
            self.config.turns,
            self.seed
        );
        self.start_turn(0);
    }

    fn start_turn(&mut self, turn: u32) {
        let field = Playfield::new(&self.config, turn, &mut self.rng);

        self.brick_handles = field
            .bricks
            .iter()
            .map(|b| self.canvas.draw_brick(b.rect.pos, b.rect.size, b.color))
            .collect();
        self.canvas
            .draw_paddle(field.paddle.pos, field.paddle.size, PADDLE_COLOR);
        self.canvas
            .draw_ball(field.ball.pos, field.ball.radius, BALL_COLOR);
        self.input.reset(field.paddle.pos);

        log::info!(
            "Turn {}/{}: {} bricks, ball velocity {:?}",
            turn + 1,
            self.config.turns,
            field.turn.remaining_bricks,
            field.ball.vel
        );
        self.field = Some(field);
        self.phase = GamePhase::Playing { turn };
    }

    /// Deliver a pointer move. Returns whether the paddle moved.
    pub fn on_pointer_move(&mut self, pos: Vec2) -> bool {
        let Some(field) = self.field.as_mut() else {
            return false;
        };
        match self.input.on_pointer_move(field, pos) {
            Some(delta) => {
                self.canvas.move_paddle_by(Vec2::new(delta, 0.0));
                true
            }
            None => false,
        }
    }

    /// Run one simulation tick. Outside `Playing` this does nothing.
    pub fn tick(&mut self) -> TickOutcome {
        let GamePhase::Playing { turn } = self.phase else {
            return TickOutcome::default();
        };
        let Some(field) = self.field.as_mut() else {
            return TickOutcome::default();
        };

        let outcome = sim::tick(field, &self.config, &mut self.rng);
        self.report.ticks += 1;
        self.canvas.move_ball_by(outcome.ball_delta);

        for event in &outcome.events {
            match event {
                GameEvent::WallBounce(_) => self.report.wall_bounces += 1,
                GameEvent::PaddleBounce { .. } => self.report.paddle_bounces += 1,
                GameEvent::BrickDestroyed { index, .. } => {
                    self.report.bricks_destroyed += 1;
                    if let Some(handle) = self.brick_handles.get(*index) {
                        self.canvas.remove_brick(*handle);
                    }
                }
            }
        }

        if let Some(reason) = outcome.turn_over {
            self.end_turn(turn, reason);
        }
        outcome
    }

    fn end_turn(&mut self, turn: u32, reason: TurnOver) {
        let (ticks, bricks_destroyed) = match self.field.take() {
            Some(field) => (
                field.turn.ticks,
                field.bricks.len() as u32 - field.turn.remaining_bricks,
            ),
            None => (0, 0),
        };
        self.canvas.clear();
        self.brick_handles.clear();

        match reason {
            TurnOver::Cleared => log::info!("Turn {} cleared in {} ticks", turn + 1, ticks),
            TurnOver::BallLost => log::info!(
                "Turn {} lost after {} ticks ({} bricks)",
                turn + 1,
                ticks,
                bricks_destroyed
            ),
        }
        self.report.turns.push(TurnResult {
            turn,
            outcome: reason,
            ticks,
            bricks_destroyed,
        });

        let next = turn + 1;
        if next >= self.config.turns {
            log::info!(
                "Game over: {} cleared, {} lost",
                self.report.turns_cleared(),
                self.report.turns_lost()
            );
            self.phase = GamePhase::Finished;
        } else {
            self.start_turn(next);
        }
    }

    /// Play the whole game, pacing ticks by the configured interval.
    ///
    /// Before each tick `pointer` is asked for a pointer position; `None`
    /// means the pointer did not move.
    pub fn run<F>(&mut self, mut pointer: F) -> &GameReport
    where
        F: FnMut(&Playfield, &InputTracker) -> Option<Vec2>,
    {
        if self.phase == GamePhase::NotStarted {
            self.start_game();
        }
        let interval = self.config.tick_interval();

        while matches!(self.phase, GamePhase::Playing { .. }) {
            let pos = self
                .field
                .as_ref()
                .and_then(|field| pointer(field, &self.input));
            if let Some(pos) = pos {
                self.on_pointer_move(pos);
            }
            self.tick();
            if !interval.is_zero() {
                std::thread::sleep(interval);
            }
        }

        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{NullCanvas, SceneCanvas};

    fn fast_config() -> GameConfig {
        GameConfig {
            tick_millis: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig {
            bricks_per_row: 40,
            ..Default::default()
        };
        assert!(matches!(
            Game::new(config, 1, NullCanvas::default()),
            Err(ConfigError::GridTooWide { .. })
        ));
    }

    #[test]
    fn test_start_game_enters_playing() {
        let mut game = Game::new(fast_config(), 42, SceneCanvas::new()).expect("valid config");
        assert_eq!(game.phase(), GamePhase::NotStarted);
        assert!(game.field().is_none());
        assert_eq!(game.tick(), TickOutcome::default());
        assert_eq!(game.report().ticks, 0);

        game.start_game();
        assert_eq!(game.phase(), GamePhase::Playing { turn: 0 });
        let field = game.field().expect("field");
        assert_eq!(field.turn.remaining_bricks, 100);
        assert_eq!(game.canvas().brick_count(), 100);
        assert_eq!(game.canvas().paddle, Some(field.paddle.pos));
        assert_eq!(game.input().last_pos, field.paddle.pos);

        // Second start is ignored
        game.start_game();
        assert_eq!(game.phase(), GamePhase::Playing { turn: 0 });
    }

    #[test]
    fn test_pointer_moves_paddle_and_canvas() {
        let mut game = Game::new(fast_config(), 42, SceneCanvas::new()).expect("valid config");
        assert!(!game.on_pointer_move(Vec2::new(10.0, 0.0)));

        game.start_game();
        assert!(game.on_pointer_move(Vec2::new(150.0, 0.0)));
        let paddle = game.field().expect("field").paddle.pos;
        assert_eq!(paddle.x, 150.0);
        assert_eq!(game.canvas().paddle, Some(paddle));

        // Overshoot past the left wall: rejected whole
        assert!(!game.on_pointer_move(Vec2::new(-10.0, 0.0)));
        assert_eq!(game.field().expect("field").paddle.pos.x, 150.0);
    }

    #[test]
    fn test_brick_removal_reaches_canvas() {
        let mut game = Game::new(fast_config(), 8, SceneCanvas::new()).expect("valid config");
        game.start_game();
        {
            let field = game.field_mut().expect("field");
            // Next tick puts the top-left corner inside brick 95 (bottom row)
            field.ball.pos = Vec2::new(205.0, 186.0);
            field.ball.vel = Vec2::new(1.0, -3.0);
        }
        let outcome = game.tick();
        assert!(matches!(
            outcome.events.as_slice(),
            [GameEvent::BrickDestroyed { .. }]
        ));
        assert_eq!(game.canvas().brick_count(), 99);
        assert_eq!(game.canvas().removals, 1);
        assert_eq!(game.report().bricks_destroyed, 1);
        let field = game.field().expect("field");
        assert_eq!(field.turn.remaining_bricks, 99);
        assert!(!field.bricks[95].alive);
    }

    #[test]
    fn test_lost_ball_starts_next_turn_with_fresh_bricks() {
        let mut game = Game::new(fast_config(), 5, SceneCanvas::new()).expect("valid config");
        game.start_game();
        {
            let field = game.field_mut().expect("field");
            field.destroy_brick(0);
            field.paddle.pos.x = 0.0;
            field.ball.pos = Vec2::new(300.0, 579.0);
            field.ball.vel = Vec2::new(1.0, 3.0);
        }
        let outcome = game.tick();
        assert_eq!(outcome.turn_over, Some(TurnOver::BallLost));
        assert_eq!(game.phase(), GamePhase::Playing { turn: 1 });

        let field = game.field().expect("field");
        assert_eq!(field.turn.turn, 1);
        assert_eq!(field.turn.remaining_bricks, 100);
        assert_eq!(field.turn.ticks, 0);
        assert_eq!(game.canvas().brick_count(), 100);
        assert_eq!(game.report().turns_lost(), 1);
        assert_eq!(game.report().turns[0].bricks_destroyed, 1);
    }

    #[test]
    fn test_finishes_after_all_turns() {
        let config = GameConfig {
            turns: 2,
            ..fast_config()
        };
        let mut game = Game::new(config, 3, NullCanvas::default()).expect("valid config");
        // Paddle never moves: every turn ends eventually
        let report = game.run(|_, _| None).clone();

        assert_eq!(game.phase(), GamePhase::Finished);
        assert_eq!(report.turns.len(), 2);
        assert_eq!(report.turns_cleared() + report.turns_lost(), 2);
        assert!(game.field().is_none());

        // Finished is terminal
        let ticks = game.report().ticks;
        assert_eq!(game.tick(), TickOutcome::default());
        assert_eq!(game.report().ticks, ticks);
        game.start_game();
        assert_eq!(game.phase(), GamePhase::Finished);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Game::new(fast_config(), 2024, NullCanvas::default()).expect("valid config");
        let mut b = Game::new(fast_config(), 2024, NullCanvas::default()).expect("valid config");
        let ra = a.run(|field, input| Some(sim::autopilot_pointer(field, input))).clone();
        let rb = b.run(|field, input| Some(sim::autopilot_pointer(field, input))).clone();

        assert_eq!(ra.turns, rb.turns);
        assert_eq!(ra.ticks, rb.ticks);
        assert_eq!(ra.bricks_destroyed, rb.bricks_destroyed);
    }
}

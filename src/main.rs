//! Breakout entry point
//!
//! Loads `breakout.json` (if present) and plays a headless demo game with the
//! autopilot steering the paddle.

use std::time::{SystemTime, UNIX_EPOCH};

use breakout::render::SceneCanvas;
use breakout::sim::autopilot_pointer;
use breakout::{Game, GameConfig};

const CONFIG_PATH: &str = "breakout.json";

fn main() {
    env_logger::init();
    log::info!("Breakout (headless demo) starting...");

    let config = GameConfig::load_or_default(CONFIG_PATH);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let mut game = match Game::new(config, seed, SceneCanvas::new()) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Game initialized with seed: {}", seed);

    let report = game.run(|field, input| Some(autopilot_pointer(field, input)));
    match serde_json::to_string_pretty(report) {
        Ok(json) => log::info!("Final report:\n{json}"),
        Err(e) => log::warn!("Could not serialize report: {e}"),
    }
}

//! Frame driver
//!
//! One call to `Game::frame` is one animation frame: advance the ball, redraw,
//! resolve collisions, and report whether another frame is wanted.

use crate::config::GameConfig;
use crate::renderer::{Surface, draw_game_over, draw_scene};
use crate::sim::{GameEvent, GameState, Key, advance, autopilot_key, play};

/// Whether the loop should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Finished,
}

/// A session plus the player-facing toggles around it
#[derive(Debug, Clone)]
pub struct Game {
    pub state: GameState,
    /// Paddle follows the ball on its own
    pub autopilot: bool,
}

impl Game {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        log::info!("New session with seed {}", seed);
        Self {
            state: GameState::new(config, seed),
            autopilot: false,
        }
    }

    pub fn from_state(state: GameState) -> Self {
        Self {
            state,
            autopilot: false,
        }
    }

    /// Player key press
    pub fn handle_key(&mut self, key: Key) {
        self.state.handle_key(key);
    }

    pub fn toggle_autopilot(&mut self) {
        self.autopilot = !self.autopilot;
        log::info!("Autopilot: {}", self.autopilot);
    }

    /// Run one frame against `surface`
    ///
    /// A finished session draws nothing, so the last frame (with its banner)
    /// stays on screen.
    pub fn frame<S: Surface>(&mut self, surface: &mut S) -> FrameOutcome {
        if self.state.is_finished() {
            return FrameOutcome::Finished;
        }

        if self.autopilot {
            if let Some(key) = autopilot_key(&self.state) {
                self.state.handle_key(key);
            }
        }

        advance(&mut self.state);
        draw_scene(surface, &self.state);

        match play(&mut self.state) {
            Some(GameEvent::GameOver) => {
                draw_game_over(surface, &self.state);
                FrameOutcome::Finished
            }
            _ => FrameOutcome::Continue,
        }
    }
}

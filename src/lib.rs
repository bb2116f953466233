//! Arkanoid - a minimal Breakout clone for the browser canvas
//!
//! Core modules:
//! - `sim`: Pure simulation (entities, tile grid, collisions, per-frame step)
//! - `renderer`: Drawing-surface abstraction, frame drawing, canvas backend
//! - `game`: Frame driver tying simulation and rendering together
//! - `config`: Tunable field, grid, paddle and ball parameters
//! - `error`: Boot and configuration errors

pub mod config;
pub mod error;
pub mod game;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, Palette};
pub use error::{BootError, ConfigError};
pub use game::{FrameOutcome, Game};

use glam::Vec2;

/// Default game constants
pub mod consts {
    /// Playing field dimensions
    pub const FIELD_WIDTH: f32 = 500.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    /// Tile grid layout
    pub const TILE_ROWS: usize = 3;
    pub const TILE_COLUMNS: usize = 8;
    pub const TILE_GAP: f32 = 3.0;
    /// Upper bound on rows × columns accepted from a config override
    pub const MAX_TILES: usize = 10_000;
    pub const TILE_HEIGHT: f32 = 25.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 150.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    /// Pixels moved per key press
    pub const PADDLE_SPEED: f32 = 50.0;
    /// Horizontal slack on the paddle hit test, in ball radii
    pub const PADDLE_MARGIN_RADII: f32 = 2.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Pixels travelled per frame
    pub const BALL_SPEED: f32 = 5.0;

    /// Id of the canvas element the game draws into
    pub const CANVAS_ID: &str = "arkanoid";
}

/// Unit vector pointing along `angle` (screen space, y grows downward)
#[inline]
pub fn direction_from_angle(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Direction of travel of a velocity, in radians
#[inline]
pub fn heading(vel: Vec2) -> f32 {
    vel.y.atan2(vel.x)
}

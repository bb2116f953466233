//! Game state and core simulation types
//!
//! Everything a session needs to advance lives here; nothing in this file
//! touches the drawing surface or the browser.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use super::collision::Aabb;
use super::grid::{TileGrid, generate_tiles};
use crate::config::GameConfig;
use crate::direction_from_angle;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Ball in motion, frames keep coming
    Play,
    /// Ball hit the floor; terminal
    Finish,
}

/// Something the update step resolved this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CeilingBounce,
    PaddleHit,
    WallBounce,
    TileBroken { row: usize, column: usize },
    GameOver,
}

/// Horizontal paddle command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` name, falling back to the legacy key code
    pub fn from_dom(key: &str, key_code: u32) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Key::Left),
            "ArrowRight" | "Right" => Some(Key::Right),
            _ => Self::from_key_code(key_code),
        }
    }

    /// Legacy key codes: 37 is left arrow, 39 is right arrow
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Key::Left),
            39 => Some(Key::Right),
            _ => None,
        }
    }
}

/// A single breakable block; size is shared through the grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Top-left corner
    pub pos: Vec2,
    pub alive: bool,
}

impl Tile {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, alive: true }
    }

    pub fn bounds(&self, size: Vec2) -> Aabb {
        Aabb::from_corner(self.pos, size)
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    /// Right-most allowed x
    max_x: f32,
}

impl Platform {
    /// Centred horizontally, resting on the bottom of the field
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.paddle_start_x(),
                config.field_height - config.paddle_height,
            ),
            width: config.paddle_width,
            height: config.paddle_height,
            speed: config.paddle_speed,
            max_x: config.paddle_max_x(),
        }
    }

    /// Step one `speed` in the key's direction unless that leaves the field
    pub fn move_by_key(&mut self, key: Key) {
        let x = match key {
            Key::Left => self.pos.x - self.speed,
            Key::Right => self.pos.x + self.speed,
        };
        if (0.0..=self.max_x).contains(&x) {
            self.pos.x = x;
        }
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }
}

/// The ball; speed is the length of `vel`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Just above the paddle's starting row, heading upward at `angle`
    pub fn new(config: &GameConfig, angle: f32) -> Self {
        Self {
            pos: Vec2::new(
                config.field_width / 2.0,
                config.field_height - config.ball_radius - config.paddle_height,
            ),
            vel: direction_from_angle(angle) * config.ball_speed,
            radius: config.ball_radius,
        }
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Redirect along `angle`, keeping the current speed
    pub fn launch(&mut self, angle: f32) {
        self.vel = direction_from_angle(angle) * self.speed();
    }

    /// Move one frame along the velocity
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Square box with the radius as half-extent
    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// Random upward launch angle in (-135°, -45°]
pub fn random_launch_angle<R: Rng>(rng: &mut R) -> f32 {
    -(rng.random::<f32>() * FRAC_PI_2 + FRAC_PI_4)
}

/// One game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    pub tiles: TileGrid,
    pub platform: Platform,
    pub ball: Ball,
    pub status: GameStatus,
    /// Frames advanced so far
    pub frame: u64,
}

impl GameState {
    /// Create a new session; `seed` picks the ball's opening angle
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let angle = random_launch_angle(&mut rng);
        Self::with_angle(config, angle)
    }

    /// Create a session with a fixed opening angle
    pub fn with_angle(config: GameConfig, angle: f32) -> Self {
        Self {
            tiles: generate_tiles(&config),
            platform: Platform::new(&config),
            ball: Ball::new(&config, angle),
            status: GameStatus::Play,
            frame: 0,
            config,
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finish
    }

    /// Apply a paddle key; ignored once the game is over
    pub fn handle_key(&mut self, key: Key) {
        if !self.is_finished() {
            self.platform.move_by_key(key);
        }
    }
}

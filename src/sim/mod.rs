//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Seeded RNG only
//! - Row-major tile iteration

pub mod collision;
pub mod grid;
pub mod state;
pub mod tick;

pub use collision::{Aabb, ball_over_platform, paddle_launch_angle};
pub use grid::{TileGrid, generate_tiles};
pub use state::{Ball, GameEvent, GameState, GameStatus, Key, Platform, Tile};
pub use tick::{advance, autopilot_key, play, step};

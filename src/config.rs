//! Game configuration
//!
//! Every tunable constant of the field, tile grid, paddle and ball. The
//! browser build reads optional overrides as JSON from the canvas element's
//! `data-config` attribute; missing keys keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Fill colors and text styling (any CSS color string)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub tile: String,
    pub paddle: String,
    pub ball: String,
    pub game_over: String,
    /// CSS font for the game-over banner
    pub game_over_font: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            tile: "rgba(0, 0, 255, 0.5)".to_string(),
            paddle: "red".to_string(),
            ball: "yellowgreen".to_string(),
            game_over: "red".to_string(),
            game_over_font: "50px Arial".to_string(),
        }
    }
}

/// Field, grid, paddle and ball parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,

    // === Tile grid ===
    pub rows: usize,
    pub columns: usize,
    /// Gap on every side of each tile
    pub gap: f32,
    pub tile_height: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal step per key press
    pub paddle_speed: f32,
    /// Slack added on both sides of the paddle hit test, in ball radii
    pub paddle_margin_radii: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Distance travelled per frame
    pub ball_speed: f32,

    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            rows: TILE_ROWS,
            columns: TILE_COLUMNS,
            gap: TILE_GAP,
            tile_height: TILE_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_margin_radii: PADDLE_MARGIN_RADII,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Parse a JSON override and validate the result
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Use the JSON override if it parses and validates, otherwise defaults
    pub fn load_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded config override");
                config
            }
            Some(Err(e)) => {
                log::warn!("Ignoring config override: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Check that the parameters describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("tile_height", self.tile_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            // Written this way so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        let non_negative = [
            ("gap", self.gap),
            ("paddle_margin_radii", self.paddle_margin_radii),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0 && value.is_finite()) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        // The canvas takes integer pixel sizes
        for (field, value) in [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
        ] {
            if value.fract() != 0.0 || value > u32::MAX as f32 {
                return Err(ConfigError::FractionalField { field, value });
            }
        }
        if self.rows == 0 || self.columns == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        match self.rows.checked_mul(self.columns) {
            Some(count) if count <= MAX_TILES => {}
            _ => {
                return Err(ConfigError::TooManyTiles {
                    rows: self.rows,
                    columns: self.columns,
                    max: MAX_TILES,
                });
            }
        }
        let tile_width = self.tile_width();
        if tile_width <= 0.0 {
            return Err(ConfigError::TileTooNarrow(tile_width));
        }
        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                paddle: self.paddle_width,
                field: self.field_width,
            });
        }
        let diameter = self.ball_radius * 2.0;
        if diameter >= self.field_width || diameter + self.paddle_height >= self.field_height {
            return Err(ConfigError::BallTooLarge { diameter });
        }
        let needed = self.rows as f32 * (self.tile_height + 2.0 * self.gap);
        let available = self.field_height - self.paddle_height - diameter;
        if needed > available {
            return Err(ConfigError::GridTooTall {
                rows: self.rows,
                needed,
                available,
            });
        }
        Ok(())
    }

    /// Width shared by every tile
    #[inline]
    pub fn tile_width(&self) -> f32 {
        self.field_width / self.columns as f32 - 2.0 * self.gap
    }

    /// Paddle x that centres it in the field
    #[inline]
    pub fn paddle_start_x(&self) -> f32 {
        (self.field_width - self.paddle_width) / 2.0
    }

    /// Largest x the paddle may take
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }

    /// Horizontal slack of the paddle hit test
    #[inline]
    pub fn paddle_margin(&self) -> f32 {
        self.ball_radius * self.paddle_margin_radii
    }
}

//! Error types
//!
//! The simulation itself is total; only booting in the browser and loading
//! configuration can fail.

use thiserror::Error;

/// Failure while acquiring the browser environment at startup
#[derive(Debug, Error)]
pub enum BootError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("canvas element #{0} not found")]
    CanvasNotFound(String),

    #[error("element #{0} is not a canvas")]
    NotACanvas(String),

    #[error("2d drawing context unavailable")]
    NoContext2d,

    #[error("failed to register {0} listener")]
    Listener(&'static str),
}

/// Invalid or unparseable game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("grid needs at least one row and one column")]
    EmptyGrid,

    #[error("tile width would be {0}; too many columns or too wide a gap")]
    TileTooNarrow(f32),

    #[error("{rows}x{columns} grid exceeds {max} tiles")]
    TooManyTiles {
        rows: usize,
        columns: usize,
        max: usize,
    },

    #[error("{rows} rows need {needed} px but only {available} px sit above the paddle band")]
    GridTooTall {
        rows: usize,
        needed: f32,
        available: f32,
    },

    #[error("{field} must be a whole number of pixels (got {value})")]
    FractionalField { field: &'static str, value: f32 },

    #[error("paddle width {paddle} exceeds field width {field}")]
    PaddleTooWide { paddle: f32, field: f32 },

    #[error("ball diameter {diameter} does not fit the field")]
    BallTooLarge { diameter: f32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_error_messages() {
        let err = BootError::CanvasNotFound("arkanoid".into());
        assert_eq!(err.to_string(), "canvas element #arkanoid not found");
        assert_eq!(
            BootError::Listener("keydown").to_string(),
            "failed to register keydown listener"
        );
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("config parse error"));
    }

    #[test]
    fn test_grid_error_messages() {
        let err = ConfigError::TooManyTiles {
            rows: 200,
            columns: 200,
            max: 10_000,
        };
        assert_eq!(err.to_string(), "200x200 grid exceeds 10000 tiles");

        let err = ConfigError::FractionalField {
            field: "field_width",
            value: 500.5,
        };
        assert_eq!(
            err.to_string(),
            "field_width must be a whole number of pixels (got 500.5)"
        );
    }
}

use thiserror::Error;

/// Errors raised while building a session configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("display size must be positive, got {width}x{height}")]
    InvalidDisplay { width: f32, height: f32 },

    #[error("{field} must be within [0, 1], got {value}")]
    ChanceOutOfRange { field: &'static str, value: f64 },

    #[error("bezier precision must be within (0, 1], got {0}")]
    InvalidPrecision(f64),

    #[error("starting lives ({starting}) must be between 1 and max lives ({max})")]
    InvalidLives { starting: u32, max: u32 },

    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be at least {min}s, got {value}")]
    TooShort {
        field: &'static str,
        value: f32,
        min: f32,
    },

    #[error("failed to parse tuning: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Error types for configuration and storage.
//!
//! The simulation itself never fails: game over is a normal state transition.
//! These errors only come from building a config for a viewport or from a
//! persistence backend.

use std::fmt;

/// A resolved `GameConfig` that the engine cannot run with.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Canvas width or height is zero, negative, or not finite.
    InvalidViewport { width: f32, height: f32 },
    /// Ball radius is zero, negative, or not finite.
    InvalidBallRadius(f32),
    /// `min_gap_width` exceeds `max_gap_width`.
    GapRange { min: f32, max: f32 },
    /// A gap could not fit inside the canvas.
    GapWiderThanCanvas { max_gap: f32, canvas_width: f32 },
    /// Initial scroll speed exceeds the cap.
    SpeedRange { initial: f32, max: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidViewport { width, height } => {
                write!(f, "invalid viewport {}x{}", width, height)
            }
            ConfigError::InvalidBallRadius(r) => write!(f, "invalid ball radius {}", r),
            ConfigError::GapRange { min, max } => {
                write!(f, "min gap width {} exceeds max gap width {}", min, max)
            }
            ConfigError::GapWiderThanCanvas {
                max_gap,
                canvas_width,
            } => write!(
                f,
                "max gap width {} does not fit canvas width {}",
                max_gap, canvas_width
            ),
            ConfigError::SpeedRange { initial, max } => {
                write!(f, "initial speed {} exceeds max speed {}", initial, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Failure reported by a `KeyValueStore` backend.
#[derive(Debug)]
pub enum StorageError {
    /// No backing storage exists (e.g. LocalStorage disabled).
    Unavailable,
    /// Backend refused the write (quota, private mode, ...).
    Rejected(String),
    /// File I/O failed.
    Io(std::io::Error),
    /// Stored file could not be encoded or decoded.
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "storage unavailable"),
            StorageError::Rejected(reason) => write!(f, "storage rejected write: {}", reason),
            StorageError::Io(e) => write!(f, "storage I/O error: {}", e),
            StorageError::Json(e) => write!(f, "storage encoding error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::Io(e) => Some(e),
            StorageError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Json(e)
    }
}

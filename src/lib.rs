//! FallDown - A falling-ball arcade game
//!
//! Core modules:
//! - `config`: Viewport-scaled game parameters
//! - `sim`: Simulation engine (ball physics, platform scrolling, gap collisions)
//! - `persistence`: Key-value storage backends (memory, file, LocalStorage)
//! - `highscores`: Best-score bookkeeping on top of a store
//! - `platform`: Input mapping from keys/touches to engine commands
//! - `session`: Host lifecycle (screens, engine rebuild on resize)

pub mod config;
pub mod error;
pub mod highscores;
pub mod persistence;
pub mod platform;
pub mod session;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::GameConfig;
pub use error::{ConfigError, StorageError};
pub use persistence::{KeyValueStore, MemoryStore};
pub use session::{Screen, Session, Snapshot};
pub use sim::{Direction, GameEngine, GameState};

/// Game tuning constants
pub mod consts {
    /// Reference viewport size (iPhone SE width) that maps to a scale of 1.0
    pub const REFERENCE_SIZE: f32 = 375.0;
    /// Smallest allowed viewport scale
    pub const MIN_SCALE: f32 = 0.8;

    /// Unscaled physics parameters at the reference size
    pub const BASE_GRAVITY: f32 = 0.35;
    pub const BASE_BALL_RADIUS: f32 = 22.0;
    pub const BASE_PLATFORM_HEIGHT: f32 = 16.0;
    pub const BASE_PLATFORM_GAP: f32 = 100.0;
    pub const BASE_INITIAL_SPEED: f32 = 1.8;
    pub const BASE_MAX_SPEED: f32 = 5.0;
    pub const BASE_SPEED_INCREMENT: f32 = 0.04;
    pub const BASE_MIN_GAP_WIDTH: f32 = 80.0;
    pub const BASE_MAX_GAP_WIDTH: f32 = 130.0;
    pub const BASE_MOVE_SPEED: f32 = 10.0;

    /// Lateral velocity multiplier applied every tick (tuned for ~60 Hz)
    pub const LATERAL_FRICTION: f32 = 0.95;
    /// Lateral velocity multiplier applied once on input release
    pub const STOP_DAMPING: f32 = 0.5;

    /// Share of `speed_increment` applied per accumulated second
    pub const SPEED_RAMP_FACTOR: f32 = 0.3;
    /// Seconds per difficulty level
    pub const LEVEL_DURATION_SECS: u32 = 10;
    /// Flat speed bonus per completed level (unscaled)
    pub const LEVEL_SPEED_BONUS: f32 = 0.4;

    /// Extra vertical reach (pixels) when testing for a landing
    pub const LANDING_SLACK: f32 = 5.0;

    /// Platforms generated at the start of a run
    pub const INITIAL_PLATFORM_COUNT: usize = 8;
    /// First platform row, as a fraction of canvas height
    pub const FIRST_PLATFORM_FRACTION: f32 = 0.5;
    /// Ball spawn point, as fractions of canvas width/height
    pub const BALL_SPAWN_X_FRACTION: f32 = 0.5;
    pub const BALL_SPAWN_Y_FRACTION: f32 = 0.3;
}

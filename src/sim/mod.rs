//! Simulation module
//!
//! All gameplay logic lives here:
//! - One fixed physics step per `update`, speed/score from real time
//! - Randomness only through an injected `RandomSource`
//! - No rendering, input-device or storage-backend dependencies

pub mod autopilot;
pub mod collision;
pub mod engine;
pub mod rng;
pub mod spawn;
pub mod state;

pub use engine::{GameEngine, scroll_speed};
pub use rng::{RandomSource, RngSource};
pub use spawn::PlatformSpawner;
pub use state::{Ball, Direction, GameEvent, GamePhase, GameState, Platform, PlatformColor};

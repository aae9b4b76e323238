//! Game state and core simulation types
//!
//! Everything the presentation layer reads lives here. The engine hands out
//! clones of these values, never references into its own state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::*;

/// Where a run currently is, derived from the two state flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Engine built but `start()` not called yet
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended
    GameOver,
}

/// Lateral input direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// -1.0 for left, 1.0 for right
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The player's ball (pixel space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    /// Spawn a resting ball at the standard start position
    pub fn spawn(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(
                config.canvas_width * BALL_SPAWN_X_FRACTION,
                config.canvas_height * BALL_SPAWN_Y_FRACTION,
            ),
            vel: Vec2::ZERO,
            radius: config.ball_radius,
        }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

/// Platform palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformColor {
    Pink,
    Green,
    Cyan,
    Yellow,
    Purple,
}

impl PlatformColor {
    pub const ALL: [PlatformColor; 5] = [
        PlatformColor::Pink,
        PlatformColor::Green,
        PlatformColor::Cyan,
        PlatformColor::Yellow,
        PlatformColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformColor::Pink => "pink",
            PlatformColor::Green => "green",
            PlatformColor::Cyan => "cyan",
            PlatformColor::Yellow => "yellow",
            PlatformColor::Purple => "purple",
        }
    }

    /// Neon fill color as 0xRRGGBB
    pub fn rgb(&self) -> u32 {
        match self {
            PlatformColor::Pink => 0xff00ff,
            PlatformColor::Green => 0x00ff00,
            PlatformColor::Cyan => 0x00ffff,
            PlatformColor::Yellow => 0xffff00,
            PlatformColor::Purple => 0xaa00ff,
        }
    }
}

/// A horizontal bar with a single gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    /// Top edge
    pub y: f32,
    pub gap_start: f32,
    pub gap_width: f32,
    pub color: PlatformColor,
    pub height: f32,
}

impl Platform {
    pub fn gap_end(&self) -> f32 {
        self.gap_start + self.gap_width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Notifications for the host, drained after each update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A run started
    Started,
    /// Another ten seconds survived; scroll speed got its step bonus
    LevelUp { level: u32 },
    /// The run ended
    GameOver {
        score: u32,
        high_score: u32,
        /// Score beat the best stored before this run
        new_high_score: bool,
    },
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    /// Creation order; iteration order carries no meaning for physics
    pub platforms: Vec<Platform>,
    /// Whole seconds survived
    pub score: u32,
    /// Whole seconds elapsed (floor of accumulated time)
    pub time: u32,
    pub is_game_over: bool,
    pub is_playing: bool,
    /// Best score, as loaded from storage or improved during this run
    pub high_score: u32,
    /// Current scroll speed (pixels per tick)
    pub speed: f32,
}

impl GameState {
    /// Fresh, not-yet-playing state around an already generated platform stack
    pub fn new(config: &GameConfig, platforms: Vec<Platform>, high_score: u32) -> Self {
        Self {
            ball: Ball::spawn(config),
            platforms,
            score: 0,
            time: 0,
            is_game_over: false,
            is_playing: false,
            high_score,
            speed: config.initial_speed,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.is_game_over {
            GamePhase::GameOver
        } else if self.is_playing {
            GamePhase::Playing
        } else {
            GamePhase::Ready
        }
    }

    /// Difficulty level (completed ten-second blocks)
    pub fn level(&self) -> u32 {
        self.time / LEVEL_DURATION_SECS
    }
}

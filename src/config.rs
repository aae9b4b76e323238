//! Viewport-scaled game configuration
//!
//! Every distance, velocity and acceleration is authored for a 375px
//! reference viewport and scaled linearly to the actual canvas. A new
//! config (and a new engine) is built whenever the viewport changes.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Immutable parameters for one engine instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Downward acceleration added to the ball every tick
    pub gravity: f32,
    pub ball_radius: f32,
    pub platform_height: f32,
    /// Vertical distance between consecutive platforms
    pub platform_gap: f32,
    /// Scroll speed (pixels per tick) at the start of a run
    pub initial_speed: f32,
    pub max_speed: f32,
    /// Continuous speed ramp rate
    pub speed_increment: f32,
    pub min_gap_width: f32,
    pub max_gap_width: f32,
    /// Lateral velocity set by a directional input
    pub move_speed: f32,
}

/// Scale factor for a viewport, relative to the reference size
///
/// Uses the smaller dimension so portrait phones and landscape desktops
/// both get sensibly sized elements, and never drops below `MIN_SCALE`.
pub fn viewport_scale(width: f32, height: f32) -> f32 {
    (width.min(height) / REFERENCE_SIZE).max(MIN_SCALE)
}

impl GameConfig {
    /// Resolve the configuration for a canvas of the given size
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let scale = viewport_scale(width, height);

        Self {
            canvas_width: width,
            canvas_height: height,
            gravity: BASE_GRAVITY * scale,
            ball_radius: BASE_BALL_RADIUS * scale,
            platform_height: BASE_PLATFORM_HEIGHT * scale,
            platform_gap: BASE_PLATFORM_GAP * scale,
            initial_speed: BASE_INITIAL_SPEED * scale,
            max_speed: BASE_MAX_SPEED * scale,
            speed_increment: BASE_SPEED_INCREMENT * scale,
            min_gap_width: BASE_MIN_GAP_WIDTH * scale,
            max_gap_width: BASE_MAX_GAP_WIDTH * scale,
            move_speed: BASE_MOVE_SPEED * scale,
        }
    }

    /// Check that the engine can generate valid platforms with this config
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims_ok = |v: f32| v.is_finite() && v > 0.0;
        if !dims_ok(self.canvas_width) || !dims_ok(self.canvas_height) {
            return Err(ConfigError::InvalidViewport {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        if !dims_ok(self.ball_radius) {
            return Err(ConfigError::InvalidBallRadius(self.ball_radius));
        }
        if self.min_gap_width > self.max_gap_width {
            return Err(ConfigError::GapRange {
                min: self.min_gap_width,
                max: self.max_gap_width,
            });
        }
        if self.max_gap_width > self.canvas_width {
            return Err(ConfigError::GapWiderThanCanvas {
                max_gap: self.max_gap_width,
                canvas_width: self.canvas_width,
            });
        }
        if self.initial_speed > self.max_speed {
            return Err(ConfigError::SpeedRange {
                initial: self.initial_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }
}

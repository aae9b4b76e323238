//! Ball vs. platform collision
//!
//! Approximate model: platforms are solid bars with one
//! open gap, and the only response is snapping the ball onto a bar's top edge.
//! Two passes run every tick:
//! 1. Landing: a falling ball that reaches a bar within one tick's travel
//!    lands on it (vertical velocity zeroed).
//! 2. Penetration: any bar that overlaps the ball's body pushes the ball up
//!    to its top edge, so bars scrolling upward carry the ball with them.

use super::state::{Ball, Platform};
use crate::consts::LANDING_SLACK;

/// Whether the ball's horizontal footprint touches solid material
///
/// The ball only passes when it sits strictly inside the gap; touching a gap
/// edge counts as solid.
pub fn overlaps_solid(ball: &Ball, platform: &Platform) -> bool {
    !(ball.left() > platform.gap_start && ball.right() < platform.gap_end())
}

/// Whether a falling ball is arriving at the platform this tick
///
/// The band extends below the bar by one tick of scrolling plus some slack so
/// a fast bar can't skip past the ball's bottom between ticks.
pub fn is_landing(ball: &Ball, platform: &Platform, speed: f32) -> bool {
    let bottom = ball.bottom();
    ball.vel.y > 0.0
        && bottom >= platform.y
        && bottom <= platform.bottom() + speed + LANDING_SLACK
}

/// Whether the bar currently overlaps the ball vertically at all
pub fn is_penetrating(ball: &Ball, platform: &Platform) -> bool {
    ball.bottom() >= platform.y && ball.top() <= platform.bottom()
}

fn snap_onto(ball: &mut Ball, platform: &Platform) {
    ball.pos.y = platform.y - ball.radius;
}

/// Land a falling ball on any bar it reaches; returns true on contact
pub fn resolve_landing(ball: &mut Ball, platforms: &[Platform], speed: f32) -> bool {
    let mut landed = false;
    for platform in platforms {
        if is_landing(ball, platform, speed) && overlaps_solid(ball, platform) {
            snap_onto(ball, platform);
            ball.vel.y = 0.0;
            landed = true;
        }
    }
    landed
}

/// Push the ball out of any bar overlapping its body; returns true on contact
///
/// Velocity is left alone: gravity keeps pulling while the bar carries the
/// ball upward.
pub fn resolve_penetration(ball: &mut Ball, platforms: &[Platform]) -> bool {
    let mut pushed = false;
    for platform in platforms {
        if is_penetrating(ball, platform) && overlaps_solid(ball, platform) {
            snap_onto(ball, platform);
            pushed = true;
        }
    }
    pushed
}

/// Run both passes in order
pub fn resolve(ball: &mut Ball, platforms: &[Platform], speed: f32) {
    resolve_landing(ball, platforms, speed);
    resolve_penetration(ball, platforms);
}

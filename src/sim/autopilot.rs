//! Demo steering
//!
//! Picks the next platform below the ball and steers toward the middle of its
//! gap. Used by the headless binary and for attract-mode style demos.

use super::state::{Ball, Direction, Platform};

/// Fraction of the gap's spare room the ball may drift before steering again
const CENTER_TOLERANCE: f32 = 0.35;

/// Closest platform whose top is at or below the ball's bottom edge
pub fn next_platform_below<'a>(ball: &Ball, platforms: &'a [Platform]) -> Option<&'a Platform> {
    platforms
        .iter()
        .filter(|p| p.y >= ball.bottom() - 1.0)
        .min_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal))
}

/// Direction to push, or `None` if the ball is already lined up with the gap
pub fn steer(ball: &Ball, platforms: &[Platform]) -> Option<Direction> {
    let target = next_platform_below(ball, platforms)?;
    let center = target.gap_start + target.gap_width / 2.0;
    let slack = ((target.gap_width / 2.0 - ball.radius) * CENTER_TOLERANCE).max(0.0);
    let offset = center - ball.pos.x;

    if offset.abs() <= slack {
        None
    } else if offset < 0.0 {
        Some(Direction::Left)
    } else {
        Some(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::PlatformColor;
    use glam::Vec2;

    fn platform(id: u32, y: f32, gap_start: f32) -> Platform {
        Platform {
            id,
            y,
            gap_start,
            gap_width: 100.0,
            color: PlatformColor::Green,
            height: 16.0,
        }
    }

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball {
            pos: Vec2::new(x, y),
            vel: Vec2::ZERO,
            radius: 20.0,
        }
    }

    #[test]
    fn test_targets_nearest_platform_below() {
        let platforms = vec![
            platform(0, 50.0, 0.0),
            platform(1, 400.0, 300.0),
            platform(2, 250.0, 100.0),
        ];
        let ball = ball_at(200.0, 200.0);
        assert_eq!(next_platform_below(&ball, &platforms).map(|p| p.id), Some(2));
    }

    #[test]
    fn test_steers_toward_gap_center() {
        let platforms = vec![platform(0, 300.0, 250.0)];
        assert_eq!(steer(&ball_at(100.0, 100.0), &platforms), Some(Direction::Right));
        assert_eq!(steer(&ball_at(390.0, 100.0), &platforms), Some(Direction::Left));
        assert_eq!(steer(&ball_at(300.0, 100.0), &platforms), None);
    }

    #[test]
    fn test_no_platform_no_input() {
        assert_eq!(steer(&ball_at(100.0, 100.0), &[]), None);
    }
}

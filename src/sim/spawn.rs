//! Procedural platform generation

use super::rng::RandomSource;
use super::state::{Platform, PlatformColor};
use crate::config::GameConfig;
use crate::consts::*;

/// Creates platforms with a random gap and color, numbering them in order
pub struct PlatformSpawner {
    rng: Box<dyn RandomSource>,
    next_id: u32,
}

impl PlatformSpawner {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng, next_id: 0 }
    }

    /// Restart id numbering (called at the start of every run)
    pub fn reset(&mut self) {
        self.next_id = 0;
    }

    /// The id the next platform will get
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    /// Draw a uniform value, tolerating sources that stray outside `[0, 1)`
    fn unit(&mut self) -> f32 {
        let v = self.rng.next_unit();
        if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Create one platform with its top edge at `y`
    pub fn spawn(&mut self, y: f32, config: &GameConfig) -> Platform {
        let gap_range = config.max_gap_width - config.min_gap_width;
        let gap_width = (config.min_gap_width + self.unit() * gap_range)
            .clamp(config.min_gap_width, config.max_gap_width);

        let max_gap_start = (config.canvas_width - gap_width).max(0.0);
        let gap_start = (self.unit() * max_gap_start).min(max_gap_start);

        let palette = &PlatformColor::ALL;
        let index = ((self.unit() * palette.len() as f32) as usize).min(palette.len() - 1);

        let id = self.next_id;
        self.next_id += 1;

        log::trace!(
            "Spawned platform {} at y={:.1} gap=[{:.1}, {:.1})",
            id,
            y,
            gap_start,
            gap_start + gap_width
        );

        Platform {
            id,
            y,
            gap_start,
            gap_width,
            color: palette[index],
            height: config.platform_height,
        }
    }

    /// The stack a run starts with: evenly spaced rows from mid-screen down
    pub fn initial_stack(&mut self, config: &GameConfig) -> Vec<Platform> {
        let start_y = config.canvas_height * FIRST_PLATFORM_FRACTION;
        (0..INITIAL_PLATFORM_COUNT)
            .map(|i| self.spawn(start_y + i as f32 * config.platform_gap, config))
            .collect()
    }

    /// Hand back the random source (engine rebuilds reuse it)
    pub fn into_rng(self) -> Box<dyn RandomSource> {
        self.rng
    }
}

impl std::fmt::Debug for PlatformSpawner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlatformSpawner")
            .field("next_id", &self.next_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::RngSource;

    fn config() -> GameConfig {
        GameConfig::for_viewport(400.0, 700.0)
    }

    #[test]
    fn test_initial_stack_layout() {
        let config = config();
        let mut spawner = PlatformSpawner::new(Box::new(RngSource::seeded(1)));
        let stack = spawner.initial_stack(&config);

        assert_eq!(stack.len(), INITIAL_PLATFORM_COUNT);
        for (i, p) in stack.iter().enumerate() {
            assert_eq!(p.id, i as u32);
            let expected_y = 350.0 + i as f32 * config.platform_gap;
            assert!((p.y - expected_y).abs() < 1e-3);
            assert_eq!(p.height, config.platform_height);
        }
        assert_eq!(spawner.next_id(), INITIAL_PLATFORM_COUNT as u32);
    }

    #[test]
    fn test_extreme_draws_stay_in_bounds() {
        let config = config();

        // Always the top of the range
        let mut high = PlatformSpawner::new(Box::new(|| 0.999_999_f32));
        let p = high.spawn(0.0, &config);
        assert!(p.gap_width <= config.max_gap_width);
        assert!(p.gap_start + p.gap_width <= config.canvas_width + 1e-3);
        assert_eq!(p.color, PlatformColor::Purple);

        // A misbehaving source returning exactly 1.0 and beyond
        let mut over = PlatformSpawner::new(Box::new(|| 1.5_f32));
        let p = over.spawn(0.0, &config);
        assert!(p.gap_width <= config.max_gap_width);
        assert!(p.gap_start + p.gap_width <= config.canvas_width + 1e-3);
        assert_eq!(p.color, PlatformColor::Purple);

        let mut low = PlatformSpawner::new(Box::new(|| 0.0_f32));
        let p = low.spawn(0.0, &config);
        assert_eq!(p.gap_start, 0.0);
        assert_eq!(p.gap_width, config.min_gap_width);
        assert_eq!(p.color, PlatformColor::Pink);
    }

    #[test]
    fn test_reset_restarts_ids() {
        let config = config();
        let mut spawner = PlatformSpawner::new(Box::new(RngSource::seeded(9)));
        spawner.spawn(0.0, &config);
        spawner.spawn(0.0, &config);
        spawner.reset();
        assert_eq!(spawner.spawn(0.0, &config).id, 0);
    }
}

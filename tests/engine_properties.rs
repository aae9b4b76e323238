//! Property tests for the simulation engine

use falldown::config::GameConfig;
use falldown::highscores::{self, STORAGE_KEY};
use falldown::persistence::MemoryStore;
use falldown::sim::{Direction, GameEngine, PlatformSpawner, RngSource, scroll_speed};
use proptest::prelude::*;

const EPS: f32 = 1e-3;

fn viewport() -> impl Strategy<Value = (f32, f32)> {
    (240.0f32..1600.0, 400.0f32..1200.0)
}

/// 0 = no input, 1 = left, 2 = right, 3 = release
fn inputs() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 1..400)
}

fn apply_input(engine: &mut GameEngine, input: u8) {
    match input {
        1 => engine.move_ball(Direction::Left),
        2 => engine.move_ball(Direction::Right),
        3 => engine.stop_ball(),
        _ => {}
    }
}

proptest! {
    #[test]
    fn generated_platforms_respect_gap_bounds((w, h) in viewport(), seed in any::<u64>()) {
        let config = GameConfig::for_viewport(w, h);
        prop_assume!(config.validate().is_ok());

        let mut spawner = PlatformSpawner::new(Box::new(RngSource::seeded(seed)));
        for i in 0..200 {
            let p = spawner.spawn(i as f32 * config.platform_gap, &config);
            prop_assert!(p.gap_start >= 0.0);
            prop_assert!(p.gap_start + p.gap_width <= config.canvas_width + EPS);
            prop_assert!(p.gap_width >= config.min_gap_width);
            prop_assert!(p.gap_width <= config.max_gap_width);
            prop_assert_eq!(p.id, i);
        }
    }

    #[test]
    fn speed_never_decreases_or_exceeds_cap((w, h) in viewport(), steps in prop::collection::vec(0.0f64..500.0, 1..200)) {
        let config = GameConfig::for_viewport(w, h);
        let mut elapsed = 0.0;
        let mut previous = scroll_speed(&config, 0.0);
        for step_ms in steps {
            elapsed += step_ms / 1000.0;
            let speed = scroll_speed(&config, elapsed);
            prop_assert!(speed >= previous);
            prop_assert!(speed <= config.max_speed);
            previous = speed;
        }
    }

    #[test]
    fn play_keeps_invariants(
        (w, h) in viewport(),
        seed in any::<u64>(),
        script in inputs(),
        frame_ms in 8.0f64..40.0,
    ) {
        let config = GameConfig::for_viewport(w, h);
        prop_assume!(config.validate().is_ok());

        let mut engine = GameEngine::new(config, MemoryStore::new(), RngSource::seeded(seed));
        engine.start(0.0);

        let mut now = 0.0;
        let mut last_speed = engine.state().speed;
        let mut last_max_id = engine.platforms().iter().map(|p| p.id).max().unwrap_or(0);

        for input in script {
            let was_over = engine.is_game_over();
            let before = engine.state();

            apply_input(&mut engine, input);
            now += frame_ms;
            engine.update(now);

            let state = engine.state();
            if was_over {
                prop_assert_eq!(state, before);
                continue;
            }

            let ball = state.ball;
            prop_assert!(ball.pos.x >= ball.radius - EPS);
            prop_assert!(ball.pos.x <= config.canvas_width - ball.radius + EPS);

            prop_assert!(state.speed >= last_speed);
            prop_assert!(state.speed <= config.max_speed);
            last_speed = state.speed;

            let mut ids: Vec<u32> = state.platforms.iter().map(|p| p.id).collect();
            let count = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), count);
            let max_id = ids.last().copied().unwrap_or(0);
            prop_assert!(max_id >= last_max_id);
            last_max_id = max_id;
        }
    }

    #[test]
    fn high_score_only_improves(stored in 0u32..40, seed in any::<u64>()) {
        let store = MemoryStore::with_entry(STORAGE_KEY, &stored.to_string());
        let config = GameConfig::for_viewport(375.0, 667.0);
        let mut engine = GameEngine::new(config, store, RngSource::seeded(seed));
        engine.start(0.0);

        let mut now = 0.0;
        while !engine.is_game_over() && now < 600_000.0 {
            now += 16.0;
            engine.update(now);
        }
        prop_assume!(engine.is_game_over());

        let state = engine.state();
        let saved = highscores::load(engine.store());
        if state.score > stored {
            prop_assert_eq!(saved, state.score);
            prop_assert_eq!(state.high_score, state.score);
        } else {
            prop_assert_eq!(saved, stored);
            prop_assert_eq!(state.high_score, stored);
        }
    }
}

#[test]
fn start_scenario_from_reference_layout() {
    let config = GameConfig {
        ball_radius: 18.0,
        ..GameConfig::for_viewport(400.0, 700.0)
    };
    let mut engine = GameEngine::new(config, MemoryStore::new(), RngSource::thread());
    engine.start(0.0);

    let ball = engine.ball();
    assert!((ball.pos.x - 200.0).abs() < EPS);
    assert!((ball.pos.y - 210.0).abs() < EPS);
    assert_eq!(engine.platforms().len(), 8);
    assert!(engine.state().is_playing);
}

#[test]
fn unparseable_stored_score_reads_as_zero() {
    let store = MemoryStore::with_entry(STORAGE_KEY, "not-a-number");
    let engine = GameEngine::new(
        GameConfig::for_viewport(375.0, 667.0),
        store,
        RngSource::seeded(0),
    );
    assert_eq!(engine.state().high_score, 0);
}

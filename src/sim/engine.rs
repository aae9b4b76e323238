//! Simulation engine
//!
//! Owns the live `GameState` and advances it once per frame. The host drives
//! it with millisecond timestamps; speed and score follow accumulated real
//! time while ball physics advance by one fixed step per `update`.

use super::collision;
use super::rng::RandomSource;
use super::spawn::PlatformSpawner;
use super::state::{Ball, Direction, GameEvent, GameState, Platform};
use crate::config::GameConfig;
use crate::consts::*;
use crate::highscores;
use crate::persistence::{KeyValueStore, MemoryStore};

/// Scroll speed after `elapsed_secs` of play
///
/// A continuous ramp plus a flat bonus for every completed ten-second level,
/// capped at `max_speed`.
pub fn scroll_speed(config: &GameConfig, elapsed_secs: f64) -> f32 {
    let elapsed = elapsed_secs.max(0.0);
    let level = elapsed.floor() as u32 / LEVEL_DURATION_SECS;
    let gradual = elapsed as f32 * config.speed_increment * SPEED_RAMP_FACTOR;
    let bonus = level as f32 * LEVEL_SPEED_BONUS;
    (config.initial_speed + gradual + bonus).min(config.max_speed)
}

/// The game simulation for one viewport size
pub struct GameEngine<S: KeyValueStore = MemoryStore> {
    config: GameConfig,
    state: GameState,
    spawner: PlatformSpawner,
    store: S,
    /// Timestamp of the previous update (ms)
    last_time: f64,
    /// Real time played this run (s)
    elapsed: f64,
    events: Vec<GameEvent>,
}

impl<S: KeyValueStore> GameEngine<S> {
    /// Build an engine in the ready (not playing) state
    pub fn new(config: GameConfig, store: S, rng: impl RandomSource + 'static) -> Self {
        Self::from_parts(config, store, Box::new(rng))
    }

    /// Build an engine from an already boxed random source
    pub fn from_parts(config: GameConfig, store: S, rng: Box<dyn RandomSource>) -> Self {
        let mut spawner = PlatformSpawner::new(rng);
        let platforms = spawner.initial_stack(&config);
        let state = GameState::new(&config, platforms, highscores::load(&store));

        Self {
            config,
            state,
            spawner,
            store,
            last_time: 0.0,
            elapsed: 0.0,
            events: Vec::new(),
        }
    }

    /// Take the engine apart, handing back storage and randomness
    pub fn into_parts(self) -> (S, Box<dyn RandomSource>) {
        (self.store, self.spawner.into_rng())
    }

    /// Replace the engine wholesale for a new config
    ///
    /// Nothing from the previous run survives; only the store and the random
    /// source carry over. Values computed under the old scale are meaningless
    /// at the new one, so there is no attempt to carry a run across.
    pub fn rebuild(&mut self, config: GameConfig) {
        self.config = config;
        self.spawner.reset();
        let platforms = self.spawner.initial_stack(&self.config);
        self.state = GameState::new(&self.config, platforms, highscores::load(&self.store));
        self.last_time = 0.0;
        self.elapsed = 0.0;
        self.events.clear();
        log::debug!(
            "Engine rebuilt for {}x{}",
            self.config.canvas_width,
            self.config.canvas_height
        );
    }

    /// Begin a new run at timestamp `now` (ms)
    pub fn start(&mut self, now: f64) {
        self.spawner.reset();
        let platforms = self.spawner.initial_stack(&self.config);
        let high_score = highscores::load(&self.store);

        self.state = GameState::new(&self.config, platforms, high_score);
        self.state.is_playing = true;
        self.last_time = now;
        self.elapsed = 0.0;
        self.events.push(GameEvent::Started);

        log::info!(
            "Run started ({}x{}, best {})",
            self.config.canvas_width,
            self.config.canvas_height,
            high_score
        );
    }

    /// Advance the simulation to timestamp `now` (ms)
    ///
    /// Timestamps must not decrease. Repeating a timestamp is harmless.
    pub fn update(&mut self, now: f64) {
        if !self.state.is_playing || self.state.is_game_over {
            return;
        }

        let dt = (now - self.last_time) / 1000.0;
        self.last_time = now;
        self.elapsed += dt;

        let previous_level = self.state.level();
        self.state.time = self.elapsed.floor().max(0.0) as u32;
        self.state.score = self.state.time;
        if self.state.level() > previous_level {
            let level = self.state.level();
            log::debug!("Level {} reached at {}s", level, self.state.time);
            self.events.push(GameEvent::LevelUp { level });
        }

        self.state.speed = scroll_speed(&self.config, self.elapsed);

        self.step_ball();
        self.step_platforms();
        collision::resolve(&mut self.state.ball, &self.state.platforms, self.state.speed);
        self.check_game_over();
    }

    /// Push the ball sideways at full move speed (replaces current lateral velocity)
    pub fn move_ball(&mut self, direction: Direction) {
        if !self.state.is_playing || self.state.is_game_over {
            return;
        }
        self.state.ball.vel.x = direction.sign() * self.config.move_speed;
    }

    /// Input released: halve lateral velocity, friction handles the rest
    pub fn stop_ball(&mut self) {
        if !self.state.is_playing {
            return;
        }
        self.state.ball.vel.x *= STOP_DAMPING;
    }

    fn step_ball(&mut self) {
        let width = self.config.canvas_width;
        let ball = &mut self.state.ball;

        ball.vel.y += self.config.gravity;
        ball.pos += ball.vel;

        if ball.left() < 0.0 {
            ball.pos.x = ball.radius;
            ball.vel.x = 0.0;
        }
        if ball.right() > width {
            ball.pos.x = width - ball.radius;
            ball.vel.x = 0.0;
        }

        ball.vel.x *= LATERAL_FRICTION;
    }

    fn step_platforms(&mut self) {
        let speed = self.state.speed;
        let platforms = &mut self.state.platforms;

        for platform in platforms.iter_mut() {
            platform.y -= speed;
        }

        let cutoff = -self.config.platform_height;
        platforms.retain(|p| p.y > cutoff);

        let lowest = platforms.iter().map(|p| p.y).fold(0.0_f32, f32::max);
        if lowest < self.config.canvas_height {
            let platform = self
                .spawner
                .spawn(lowest + self.config.platform_gap, &self.config);
            platforms.push(platform);
        }
    }

    fn check_game_over(&mut self) {
        let ball = &self.state.ball;
        let off_top = ball.top() < 0.0;
        // Safety net: normal play always has a platform below the ball
        let off_bottom = ball.bottom() > self.config.canvas_height;

        if !off_top && !off_bottom {
            return;
        }
        if off_bottom && !off_top {
            log::warn!("Ball left the bottom of the canvas at y={:.1}", ball.pos.y);
        }
        self.finish();
    }

    fn finish(&mut self) {
        self.state.is_game_over = true;
        self.state.is_playing = false;

        let score = self.state.score;
        let new_high_score = highscores::record(&mut self.store, score, self.state.high_score);
        if new_high_score {
            self.state.high_score = score;
        }

        log::info!("Game over: survived {}s (best {})", score, self.state.high_score);
        self.events.push(GameEvent::GameOver {
            score,
            high_score: self.state.high_score,
            new_high_score,
        });
    }

    /// Copy of the full state
    pub fn state(&self) -> GameState {
        self.state.clone()
    }

    /// Copy of the ball
    pub fn ball(&self) -> Ball {
        self.state.ball
    }

    /// Copy of the platform stack
    pub fn platforms(&self) -> Vec<Platform> {
        self.state.platforms.clone()
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Real time played this run, in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl<S: KeyValueStore> std::fmt::Debug for GameEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEngine")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("elapsed", &self.elapsed)
            .finish_non_exhaustive()
    }
}

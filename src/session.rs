//! Host-side session
//!
//! Tracks which screen is showing, rebuilds the engine whenever the viewport
//! changes, and turns engine events into the summary shown after a run.

use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::persistence::KeyValueStore;
use crate::platform::input::{self, InputCommand, TouchTracker};
use crate::sim::{GameEngine, GameEvent, GameState, RandomSource};

/// Which screen the host should present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    /// Title screen with the best score
    Start,
    Playing,
    GameOver,
}

/// Result of the last finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOverSummary {
    pub score: u32,
    pub high_score: u32,
    pub new_high_score: bool,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub screen: Screen,
    pub state: GameState,
    pub summary: Option<GameOverSummary>,
}

/// One game window: an engine plus screen flow and input state
pub struct Session<S: KeyValueStore> {
    engine: GameEngine<S>,
    screen: Screen,
    summary: Option<GameOverSummary>,
    touch: TouchTracker,
}

impl<S: KeyValueStore> Session<S> {
    /// Create a session for a `width` x `height` viewport
    pub fn new(
        width: f32,
        height: f32,
        store: S,
        rng: impl RandomSource + 'static,
    ) -> Result<Self, ConfigError> {
        let config = GameConfig::for_viewport(width, height);
        config.validate()?;

        Ok(Self {
            engine: GameEngine::new(config, store, rng),
            screen: Screen::Start,
            summary: None,
            touch: TouchTracker::new(),
        })
    }

    /// React to a viewport change; returns true if the engine was rebuilt
    ///
    /// A run in progress is discarded and the session goes back to the start
    /// screen. On error the current engine is kept untouched.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<bool, ConfigError> {
        let current = self.engine.config();
        if current.canvas_width == width && current.canvas_height == height {
            return Ok(false);
        }

        let config = GameConfig::for_viewport(width, height);
        config.validate()?;

        if self.engine.is_playing() {
            log::info!("Viewport changed mid-run, discarding run");
        }
        self.engine.rebuild(config);
        self.screen = Screen::Start;
        self.summary = None;
        self.touch = TouchTracker::new();
        Ok(true)
    }

    /// Start (or restart) a run at timestamp `now` (ms)
    pub fn begin(&mut self, now: f64) {
        self.engine.start(now);
        self.engine.drain_events();
        self.screen = Screen::Playing;
        self.summary = None;
    }

    /// Advance one frame; returns the events it raised
    pub fn frame(&mut self, now: f64) -> Vec<GameEvent> {
        if self.screen != Screen::Playing {
            return Vec::new();
        }

        self.engine.update(now);
        let events = self.engine.drain_events();
        for event in &events {
            if let GameEvent::GameOver {
                score,
                high_score,
                new_high_score,
            } = *event
            {
                self.screen = Screen::GameOver;
                self.summary = Some(GameOverSummary {
                    score,
                    high_score,
                    new_high_score,
                });
            }
        }
        events
    }

    /// Forward a command while a run is active
    pub fn command(&mut self, command: InputCommand) {
        if self.screen == Screen::Playing {
            command.apply(&mut self.engine);
        }
    }

    /// Key pressed; returns true if the key is bound
    pub fn key_down(&mut self, key: &str) -> bool {
        match input::key_down(key) {
            Some(command) => {
                self.command(command);
                true
            }
            None => false,
        }
    }

    /// Key released; returns true if the key is bound
    pub fn key_up(&mut self, key: &str) -> bool {
        match input::key_up(key) {
            Some(command) => {
                self.command(command);
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f32) {
        let width = self.engine.config().canvas_width;
        let command = self.touch.touch_start(x, width);
        self.command(command);
    }

    pub fn touch_move(&mut self, x: f32) {
        let width = self.engine.config().canvas_width;
        if let Some(command) = self.touch.touch_move(x, width) {
            self.command(command);
        }
    }

    pub fn touch_end(&mut self) {
        let command = self.touch.touch_end();
        self.command(command);
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn summary(&self) -> Option<GameOverSummary> {
        self.summary
    }

    pub fn engine(&self) -> &GameEngine<S> {
        &self.engine
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            screen: self.screen,
            state: self.engine.state(),
            summary: self.summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highscores::STORAGE_KEY;
    use crate::persistence::MemoryStore;
    use crate::sim::{Direction, RngSource};

    fn session() -> Session<MemoryStore> {
        Session::new(400.0, 700.0, MemoryStore::new(), RngSource::seeded(11)).unwrap()
    }

    /// Run frames until the ball is carried off the top (no input)
    fn play_until_over(session: &mut Session<MemoryStore>) -> f64 {
        let mut now = 0.0;
        for _ in 0..100_000 {
            now += 16.0;
            session.frame(now);
            if session.screen() == Screen::GameOver {
                break;
            }
        }
        now
    }

    #[test]
    fn test_rejects_degenerate_viewport() {
        let result = Session::new(0.0, 0.0, MemoryStore::new(), RngSource::seeded(1));
        assert!(matches!(result, Err(ConfigError::InvalidViewport { .. })));
    }

    #[test]
    fn test_screen_flow() {
        let mut session = session();
        assert_eq!(session.screen(), Screen::Start);
        // Frames before starting do nothing
        assert!(session.frame(16.0).is_empty());

        session.begin(0.0);
        assert_eq!(session.screen(), Screen::Playing);

        play_until_over(&mut session);
        assert_eq!(session.screen(), Screen::GameOver);
        let summary = session.summary().unwrap();
        assert_eq!(summary.high_score, summary.score);
        assert_eq!(summary.new_high_score, summary.score > 0);

        session.begin(1e9);
        assert_eq!(session.screen(), Screen::Playing);
        assert!(session.summary().is_none());
        assert_eq!(session.snapshot().state.high_score, summary.high_score);
    }

    #[test]
    fn test_resize_rebuilds_engine() {
        let mut session = session();
        session.begin(0.0);
        session.frame(16.0);

        assert!(!session.resize(400.0, 700.0).unwrap());
        assert_eq!(session.screen(), Screen::Playing);

        assert!(session.resize(800.0, 600.0).unwrap());
        assert_eq!(session.screen(), Screen::Start);
        let config = *session.engine().config();
        assert_eq!(config, GameConfig::for_viewport(800.0, 600.0));
        assert!(!session.engine().is_playing());

        // A bad size keeps the working engine
        assert!(session.resize(-1.0, 600.0).is_err());
        assert_eq!(*session.engine().config(), config);
    }

    #[test]
    fn test_input_only_while_playing() {
        let mut session = session();
        assert!(session.key_down("ArrowLeft"));
        assert_eq!(session.engine().ball().vel.x, 0.0);

        session.begin(0.0);
        assert!(session.key_down("ArrowLeft"));
        let move_speed = session.engine().config().move_speed;
        assert_eq!(session.engine().ball().vel.x, -move_speed);
        assert!(session.key_up("ArrowLeft"));
        assert_eq!(session.engine().ball().vel.x, -move_speed * 0.5);
        assert!(!session.key_down("Escape"));

        session.touch_start(350.0);
        assert_eq!(session.engine().ball().vel.x, move_speed);
        session.touch_move(10.0);
        assert_eq!(session.engine().ball().vel.x, -move_speed);
        session.touch_end();
        assert_eq!(session.engine().ball().vel.x, -move_speed * 0.5);

        session.command(InputCommand::Move(Direction::Right));
        assert_eq!(session.engine().ball().vel.x, move_speed);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let mut session = Session::new(
            400.0,
            700.0,
            MemoryStore::with_entry(STORAGE_KEY, "8"),
            RngSource::seeded(5),
        )
        .unwrap();
        session.begin(0.0);

        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["screen"], "playing");
        assert_eq!(json["state"]["high_score"], 8);
        assert_eq!(json["state"]["platforms"].as_array().map(|p| p.len()), Some(8));
        assert!(json["summary"].is_null());
    }
}

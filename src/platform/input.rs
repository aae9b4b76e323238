//! Keyboard and touch mapping

use crate::persistence::KeyValueStore;
use crate::sim::{Direction, GameEngine};

/// What a piece of input asks the engine to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    Stop,
}

impl InputCommand {
    /// Forward the command to an engine
    pub fn apply<S: KeyValueStore>(self, engine: &mut GameEngine<S>) {
        match self {
            InputCommand::Move(direction) => engine.move_ball(direction),
            InputCommand::Stop => engine.stop_ball(),
        }
    }
}

fn key_direction(key: &str) -> Option<Direction> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(Direction::Left),
        "ArrowRight" | "d" | "D" => Some(Direction::Right),
        _ => None,
    }
}

/// Command for a key press (DOM `KeyboardEvent.key` names)
pub fn key_down(key: &str) -> Option<InputCommand> {
    key_direction(key).map(InputCommand::Move)
}

/// Command for a key release
pub fn key_up(key: &str) -> Option<InputCommand> {
    key_direction(key).map(|_| InputCommand::Stop)
}

/// Touch steering: hold on the left or right half of the screen
#[derive(Debug, Clone, Default)]
pub struct TouchTracker {
    current: Option<Direction>,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    fn side(x: f32, width: f32) -> Direction {
        if x < width / 2.0 {
            Direction::Left
        } else {
            Direction::Right
        }
    }

    /// Finger down at `x` on a surface `width` wide
    pub fn touch_start(&mut self, x: f32, width: f32) -> InputCommand {
        let direction = Self::side(x, width);
        self.current = Some(direction);
        InputCommand::Move(direction)
    }

    /// Finger moved; only crossing the middle produces a new command
    pub fn touch_move(&mut self, x: f32, width: f32) -> Option<InputCommand> {
        let direction = Self::side(x, width);
        if self.current == Some(direction) {
            return None;
        }
        self.current = Some(direction);
        Some(InputCommand::Move(direction))
    }

    /// Finger lifted
    pub fn touch_end(&mut self) -> InputCommand {
        self.current = None;
        InputCommand::Stop
    }

    pub fn current(&self) -> Option<Direction> {
        self.current
    }
}

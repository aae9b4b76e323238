//! Platform abstraction layer
//!
//! Maps raw host input (key names, touch positions) to engine commands so
//! every host (browser, native demo) steers the ball the same way.

pub mod input;

pub use input::{InputCommand, TouchTracker, key_down, key_up};

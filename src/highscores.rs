//! Best-score bookkeeping
//!
//! A single integer string under one key. Anything unreadable counts as zero
//! so a corrupted entry can never block a new game.

use crate::persistence::KeyValueStore;

/// Storage key for the best score
pub const STORAGE_KEY: &str = "falldown2-highscore";

/// Parse a stored best score, treating junk as zero
pub fn parse_high_score(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) => u32::try_from(v.max(0)).unwrap_or(u32::MAX),
        Err(_) => {
            log::warn!("Ignoring unparseable high score {:?}", raw);
            0
        }
    }
}

/// Load the best score, zero if missing or unreadable
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> u32 {
    store
        .get(STORAGE_KEY)
        .map(|raw| parse_high_score(&raw))
        .unwrap_or(0)
}

/// Persist `score` if it beats `previous`; returns true when it did
///
/// A failed write is logged and otherwise ignored: the caller still treats the
/// score as the new best for the rest of the session.
pub fn record<S: KeyValueStore + ?Sized>(store: &mut S, score: u32, previous: u32) -> bool {
    if score <= previous {
        return false;
    }
    match store.set(STORAGE_KEY, &score.to_string()) {
        Ok(()) => log::info!("New high score {} saved", score),
        Err(e) => log::warn!("New high score {} not saved: {}", score, e),
    }
    true
}

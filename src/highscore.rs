//! Best score tracking
//!
//! A single scalar persisted as a decimal string, so values written by older
//! builds of the page stay readable.

use crate::consts::BEST_SCORE_KEY;
use crate::persistence::KeyValueStore;

/// Highest score seen across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BestScore {
    value: u64,
}

impl BestScore {
    pub fn new(value: u64) -> Self {
        Self { value }
    }

    /// Read the stored best, defaulting to 0 when absent or unreadable
    pub fn load(store: &impl KeyValueStore) -> Self {
        let Some(raw) = store.get(BEST_SCORE_KEY) else {
            log::info!("No best score found, starting fresh");
            return Self::default();
        };
        match parse_score(&raw) {
            Some(value) => {
                log::info!("Loaded best score {}", value);
                Self { value }
            }
            None => {
                log::warn!("Ignoring unreadable best score {:?}", raw);
                Self::default()
            }
        }
    }

    pub fn get(&self) -> u64 {
        self.value
    }

    /// Check if a score beats the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.value
    }

    /// Record a finished run. Returns true if it set a new best; the new
    /// value is written through to `store`.
    pub fn submit(&mut self, score: u64, store: &mut impl KeyValueStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.value = score;
        match store.set(BEST_SCORE_KEY, &score.to_string()) {
            Ok(()) => log::info!("New best score {} saved", score),
            Err(e) => log::warn!("New best score {} not saved: {}", score, e),
        }
        true
    }
}

/// Accepts plain integers and integral floats ("120", "120.0")
fn parse_score(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(value) = raw.parse::<u64>() {
        return Some(value);
    }
    let value = raw.parse::<f64>().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
}

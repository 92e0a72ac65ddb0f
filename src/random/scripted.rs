//! # ScriptedRandom: fixed playback
//!
//! Plays back a predetermined sequence of draws, then repeats a fallback value
//! forever. With the default fallback of `0.0` an exhausted script never passes
//! a throttle gate, which keeps timer tests quiet once the script runs out.
//!
//! The draw counter is shared between clones, so a test can keep a clone and
//! observe how many draws the feed consumed.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use super::RandomSource;

/// Scripted sequence of draws.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    values: VecDeque<f64>,
    fallback: f64,
    draws: Arc<AtomicU64>,
}

impl ScriptedRandom {
    /// Plays `values` in order, then `0.0` forever.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            values: values.into_iter().collect(),
            fallback: 0.0,
            draws: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replaces the value returned once the script is exhausted.
    #[must_use]
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback;
        self
    }

    /// Total draws taken from this source and all its clones.
    pub fn draws(&self) -> u64 {
        self.draws.load(Ordering::Relaxed)
    }

    /// Scripted values not yet consumed by this instance.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        self.draws.fetch_add(1, Ordering::Relaxed);
        self.values.pop_front().unwrap_or(self.fallback)
    }
}

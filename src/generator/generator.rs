//! # EventGenerator: throttled synthetic update producer.
//!
//! One call to [`EventGenerator::maybe_generate`] per generator tick. The
//! generator owns its random source and sampler; it has no timers of its own
//! and is driven by the feed while the feed has subscribers.
//!
//! ## Rules
//! - Pure and local: no I/O, cannot fail.
//! - Never touches `read`; generated events are always unread.
//! - Exactly one draw is consumed on a throttled tick.

use std::fmt;

use chrono::Utc;

use crate::events::{EventKind, UpdateEvent};
use crate::policies::ThrottlePolicy;
use crate::random::{RandomSource, pick_below, pick_index};

use super::id::{DISAMBIGUATOR_SPACE, compose_id};
use super::sampler::Sampler;

/// Produces [`UpdateEvent`]s behind a [`ThrottlePolicy`] gate.
pub struct EventGenerator {
    throttle: ThrottlePolicy,
    rng: Box<dyn RandomSource>,
    sampler: Box<dyn Sampler>,
}

impl EventGenerator {
    /// Creates a generator from its parts.
    pub fn new(
        throttle: ThrottlePolicy,
        rng: Box<dyn RandomSource>,
        sampler: Box<dyn Sampler>,
    ) -> Self {
        Self {
            throttle,
            rng,
            sampler,
        }
    }

    /// The gate applied on each tick.
    pub fn throttle(&self) -> ThrottlePolicy {
        self.throttle
    }

    /// Runs one tick: returns an event on roughly `emit_probability` of calls.
    pub fn maybe_generate(&mut self) -> Option<UpdateEvent> {
        let draw = self.rng.next_f64();
        if !self.throttle.admits(draw) {
            return None;
        }
        Some(self.generate())
    }

    /// Produces one event unconditionally (no throttle draw).
    pub fn generate(&mut self) -> UpdateEvent {
        let kind = EventKind::ALL[pick_index(self.rng.as_mut(), EventKind::ALL.len())];
        let payload = self.sampler.sample(kind, self.rng.as_mut());

        let at = Utc::now();
        let id = compose_id(at, pick_below(self.rng.as_mut(), DISAMBIGUATOR_SPACE));
        UpdateEvent::new(id, payload).at(at)
    }
}

impl fmt::Debug for EventGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventGenerator")
            .field("throttle", &self.throttle)
            .finish_non_exhaustive()
    }
}

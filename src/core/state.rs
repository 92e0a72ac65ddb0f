//! # Feed state: bounded newest-first history plus connectivity and bookkeeping.
//!
//! [`FeedState`] is owned by exactly one [`Feed`](crate::Feed) and only ever
//! touched under its lock. All history invariants live here:
//!
//! ## Rules
//! - `history` is newest-first and never longer than `capacity`
//! - appending an id already present in history is rejected (dedup)
//! - appended events are stored unread; only `acknowledge` sets `read`
//! - `last_update_at` follows the most recent append and is unset after `clear`

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::events::UpdateEvent;
use crate::subscribers::SubscriberSet;

use super::delivery::DeliveryQueue;

/// Monotonic counters describing what a feed has done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FeedStats {
    /// Generator ticks run (throttled or not).
    pub generator_ticks: u64,
    /// Generated events that were stored (id collisions excluded).
    pub generated: u64,
    /// Events appended to history.
    pub published: u64,
    /// Publishes rejected because the id was already in history.
    pub duplicates: u64,
    /// Events dropped from the back of history on overflow.
    pub evicted: u64,
    /// Connectivity ticks run.
    pub connectivity_checks: u64,
    /// Times the feed went from dormant to active.
    pub activations: u64,
}

pub(crate) struct FeedState {
    history: VecDeque<UpdateEvent>,
    capacity: usize,
    last_update_at: Option<DateTime<Utc>>,
    pub(crate) connected: bool,
    pub(crate) subscribers: SubscriberSet,
    /// Present while the feed is active; cancelling it stops both timers.
    pub(crate) timers: Option<CancellationToken>,
    /// Appended events waiting for fan-out, in append order.
    pub(crate) deliveries: DeliveryQueue,
    pub(crate) stats: FeedStats,
}

impl FeedState {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(capacity),
            capacity,
            last_update_at: None,
            connected: true,
            subscribers: SubscriberSet::new(),
            timers: None,
            deliveries: DeliveryQueue::default(),
            stats: FeedStats::default(),
        }
    }

    /// Prepends `event` and evicts from the back down to capacity.
    ///
    /// Returns `false` (and stores nothing) if an entry with the same id is present.
    pub(crate) fn append(&mut self, mut event: UpdateEvent) -> bool {
        if self.history.iter().any(|e| e.id == event.id) {
            self.stats.duplicates += 1;
            return false;
        }
        event.read = false;
        self.last_update_at = Some(event.timestamp);
        self.history.push_front(event);
        while self.history.len() > self.capacity {
            self.history.pop_back();
            self.stats.evicted += 1;
        }
        self.stats.published += 1;
        true
    }

    /// Empties history; connectivity and subscribers are untouched.
    pub(crate) fn clear(&mut self) {
        self.history.clear();
        self.last_update_at = None;
    }

    /// Marks entries with `id` as read. Returns `true` if any was unread.
    pub(crate) fn acknowledge(&mut self, id: &str) -> bool {
        let mut changed = false;
        for e in self.history.iter_mut().filter(|e| e.id == id && !e.read) {
            e.read = true;
            changed = true;
        }
        changed
    }

    pub(crate) fn unread_count(&self) -> usize {
        self.history.iter().filter(|e| !e.read).count()
    }

    pub(crate) fn history(&self) -> Vec<UpdateEvent> {
        self.history.iter().cloned().collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.history.len()
    }

    pub(crate) fn last_update_at(&self) -> Option<DateTime<Utc>> {
        self.last_update_at
    }

    /// Fresh start after a dormant period: empty log, connected.
    pub(crate) fn restart(&mut self) {
        self.clear();
        self.connected = true;
    }
}

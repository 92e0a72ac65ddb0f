//! # Collector: record delivered updates
//!
//! Keeps every update it receives, in delivery order. Useful for hosts that
//! want a private, unbounded log and for tests asserting delivery order.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::events::UpdateEvent;

use super::Subscribe;

/// Records delivered updates.
#[derive(Debug, Default)]
pub struct Collector {
    seen: Mutex<Vec<UpdateEvent>>,
}

impl Collector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of all delivered updates, oldest first.
    pub fn events(&self) -> Vec<UpdateEvent> {
        self.lock().clone()
    }

    /// Ids of all delivered updates, oldest first.
    pub fn ids(&self) -> Vec<String> {
        self.lock().iter().map(|e| e.id.clone()).collect()
    }

    /// Number of delivered updates.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<UpdateEvent>> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Subscribe for Collector {
    fn on_update(&self, update: &UpdateEvent) {
        self.lock().push(update.clone());
    }

    fn name(&self) -> &'static str {
        "collector"
    }
}

//! # Delivery queue: append-ordered fan-out.
//!
//! Every successful append enqueues one [`Delivery`] (the event plus the
//! subscriber snapshot taken at append time) while the state lock is held.
//! Exactly one publisher at a time drains the queue; any publish that lands
//! while a drain is running (nested inside a callback, or from another
//! thread) only enqueues and returns.
//!
//! ```text
//! publish(e1) ── append, enqueue, claim ──► drain: fan_out(e1)
//!                                             │   └─ callback publishes e2 ── append, enqueue
//! publish(e3) ── append, enqueue (thread B)   │
//!                                             ├─► fan_out(e2)
//!                                             ├─► fan_out(e3)
//!                                             └─► queue empty: release, return
//! ```
//!
//! Subscribers therefore see events in exactly the order they were appended.

use std::collections::VecDeque;
use std::sync::Arc;

use crate::events::UpdateEvent;
use crate::subscribers::Subscribe;

/// One pending fan-out.
pub(crate) struct Delivery {
    pub(crate) event: UpdateEvent,
    pub(crate) targets: Vec<Arc<dyn Subscribe>>,
}

/// FIFO of pending fan-outs plus the drain claim.
#[derive(Default)]
pub(crate) struct DeliveryQueue {
    pending: VecDeque<Delivery>,
    draining: bool,
}

impl DeliveryQueue {
    pub(crate) fn push(&mut self, event: UpdateEvent, targets: Vec<Arc<dyn Subscribe>>) {
        self.pending.push_back(Delivery { event, targets });
    }

    /// Claims the drain. Returns `false` if another publish is already draining.
    pub(crate) fn claim(&mut self) -> bool {
        if self.draining {
            return false;
        }
        self.draining = true;
        true
    }

    /// Next delivery for the drainer. Releases the claim once the queue is empty.
    pub(crate) fn next(&mut self) -> Option<Delivery> {
        let next = self.pending.pop_front();
        if next.is_none() {
            self.draining = false;
        }
        next
    }

    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{OfficialUpdate, Payload};

    fn update(id: &str) -> UpdateEvent {
        UpdateEvent::new(
            id,
            Payload::OfficialUpdate(OfficialUpdate {
                source_name: "Emergency Services".into(),
                title: "Situation Update".into(),
                related_disaster_id: "1".into(),
            }),
        )
    }

    #[test]
    fn test_single_drainer_fifo() {
        let mut queue = DeliveryQueue::default();
        queue.push(update("a"), Vec::new());
        assert!(queue.claim());

        queue.push(update("b"), Vec::new());
        assert!(!queue.claim());
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.next().map(|d| d.event.id), Some("a".to_string()));
        assert_eq!(queue.next().map(|d| d.event.id), Some("b".to_string()));
        assert!(queue.next().is_none());

        // released once empty
        assert!(queue.claim());
    }
}

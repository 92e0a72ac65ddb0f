//! # SubscriberSet: ordered registrations with snapshot fan-out
//!
//! [`SubscriberSet`] keeps subscribers in registration order, each under its own
//! [`SubscriberId`], so any registration can be removed without disturbing the
//! others.
//!
//! ## What it guarantees
//! - Delivery in registration order.
//! - Fan-out iterates a snapshot: registrations added or removed while an
//!   update is being delivered take effect from the next publish.
//! - Panics inside subscribers are caught and logged (isolation).
//!
//! ## Diagram
//! ```text
//!    publish(ev)
//!        │  snapshot() under lock
//!        ▼
//!    [S1, S2, ..., SN] ──► S1.on_update ─► S2.on_update ─► ... ─► SN.on_update
//! ```

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::events::UpdateEvent;

use super::Subscribe;

/// Identity of one registration within a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SubscriberId(u64);

struct Registration {
    id: SubscriberId,
    sub: Arc<dyn Subscribe>,
}

/// Registration-ordered subscriber list.
#[derive(Default)]
pub(crate) struct SubscriberSet {
    entries: Vec<Registration>,
    next_id: u64,
}

impl SubscriberSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a registration and returns its id.
    pub(crate) fn insert(&mut self, sub: Arc<dyn Subscribe>) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.entries.push(Registration { id, sub });
        id
    }

    /// Removes exactly the registration `id`; returns `false` if it is already gone.
    pub(crate) fn remove(&mut self, id: SubscriberId) -> bool {
        match self.entries.iter().position(|r| r.id == id) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Stable copy of the current registrations, in order.
    pub(crate) fn snapshot(&self) -> Vec<Arc<dyn Subscribe>> {
        self.entries.iter().map(|r| Arc::clone(&r.sub)).collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Delivers `update` to every subscriber in `snapshot`, in order.
///
/// Returns how many subscribers handled it without panicking.
pub(crate) fn fan_out(snapshot: &[Arc<dyn Subscribe>], update: &UpdateEvent) -> usize {
    let mut delivered = 0;
    for sub in snapshot {
        match catch_unwind(AssertUnwindSafe(|| sub.on_update(update))) {
            Ok(()) => delivered += 1,
            Err(panic) => {
                let info = panic
                    .downcast_ref::<&str>()
                    .map(|s| (*s).to_string())
                    .or_else(|| panic.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                tracing::warn!(
                    subscriber = sub.name(),
                    update = %update.id,
                    info = %info,
                    "subscriber panicked"
                );
            }
        }
    }
    delivered
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::events::{NewReport, Payload, Priority};
    use crate::subscribers::SubscriberFn;

    fn update(id: &str) -> UpdateEvent {
        UpdateEvent::new(
            id,
            Payload::NewReport(NewReport {
                reporter_id: "responder_1".into(),
                priority: Priority::Low,
                related_disaster_id: "1".into(),
            }),
        )
    }

    #[test]
    fn test_remove_is_exact_and_idempotent() {
        let mut set = SubscriberSet::new();
        let a = set.insert(SubscriberFn::arc("a", |_: &UpdateEvent| {}));
        let b = set.insert(SubscriberFn::arc("b", |_: &UpdateEvent| {}));
        assert_ne!(a, b);
        assert_eq!(set.len(), 2);

        assert!(set.remove(a));
        assert!(!set.remove(a));
        assert_eq!(set.len(), 1);
        assert_eq!(set.snapshot()[0].name(), "b");
    }

    #[test]
    fn test_fan_out_order_and_panic_isolation() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut set = SubscriberSet::new();
        for name in ["first", "second"] {
            let order = Arc::clone(&order);
            set.insert(SubscriberFn::arc(name, move |_: &UpdateEvent| {
                order.lock().unwrap().push(name);
            }));
        }
        set.insert(SubscriberFn::arc("boom", |_: &UpdateEvent| panic!("boom")));
        {
            let order = Arc::clone(&order);
            set.insert(SubscriberFn::arc("last", move |_: &UpdateEvent| {
                order.lock().unwrap().push("last");
            }));
        }

        let delivered = fan_out(&set.snapshot(), &update("u1"));
        assert_eq!(delivered, 3);
        assert_eq!(*order.lock().unwrap(), vec!["first", "second", "last"]);
    }
}

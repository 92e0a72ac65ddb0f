//! # Subscription handles.
//!
//! [`Feed::subscribe`](crate::Feed::subscribe) returns a [`Subscription`].
//! Calling [`Subscription::unsubscribe`] removes exactly that registration;
//! further calls are no-ops. Dropping the handle does **not** unsubscribe,
//! so fire-and-forget registrations stay alive for the feed's lifetime.
//!
//! The handle holds a weak reference: it never keeps a feed alive, and
//! unsubscribing after the feed is gone does nothing. Subscribers themselves
//! are owned by the feed; one that holds a `Feed` clone keeps the feed alive
//! until it is unsubscribed, so subscribers should hold a
//! [`WeakFeed`](crate::WeakFeed) instead.

use std::sync::Weak;
use std::sync::atomic::{AtomicBool, Ordering};

use super::feed::{Feed, FeedInner};
use crate::subscribers::SubscriberId;

/// Removable registration on a feed.
#[derive(Debug)]
pub struct Subscription {
    id: SubscriberId,
    name: &'static str,
    feed: Weak<FeedInner>,
    done: AtomicBool,
}

impl Subscription {
    pub(crate) fn new(id: SubscriberId, name: &'static str, feed: Weak<FeedInner>) -> Self {
        Self {
            id,
            name,
            feed,
            done: AtomicBool::new(false),
        }
    }

    /// Removes this registration. Returns `true` only on the call that removed it.
    ///
    /// If this was the last subscriber, the feed's timers stop.
    pub fn unsubscribe(&self) -> bool {
        if self.done.swap(true, Ordering::AcqRel) {
            return false;
        }
        match self.feed.upgrade() {
            Some(inner) => Feed::from_inner(inner).unsubscribe(self.id),
            None => false,
        }
    }

    /// True until [`unsubscribe`](Self::unsubscribe) has been called.
    pub fn is_active(&self) -> bool {
        !self.done.load(Ordering::Acquire)
    }

    /// Name of the subscribed handler.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

//! # Function-backed subscriber (`SubscriberFn`)
//!
//! [`SubscriberFn`] wraps a closure `F: Fn(&UpdateEvent)` so callers can
//! subscribe without declaring a type.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use crisisfeed::{Subscribe, SubscriberFn, UpdateEvent};
//!
//! let sub: Arc<dyn Subscribe> = SubscriberFn::arc("printer", |ev: &UpdateEvent| {
//!     println!("{} {}", ev.kind(), ev.id);
//! });
//! assert_eq!(sub.name(), "printer");
//! ```

use std::sync::Arc;

use crate::events::UpdateEvent;

use super::Subscribe;

/// Closure-backed subscriber.
pub struct SubscriberFn<F> {
    name: &'static str,
    f: F,
}

impl<F> SubscriberFn<F>
where
    F: Fn(&UpdateEvent) + Send + Sync + 'static,
{
    /// Creates a new closure subscriber.
    ///
    /// Prefer [`SubscriberFn::arc`] when you immediately need an `Arc<dyn Subscribe>`.
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }

    /// Creates the subscriber and returns it as a shared handle.
    pub fn arc(name: &'static str, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> Subscribe for SubscriberFn<F>
where
    F: Fn(&UpdateEvent) + Send + Sync + 'static,
{
    fn on_update(&self, update: &UpdateEvent) {
        (self.f)(update)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

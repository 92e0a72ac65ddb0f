//! # Update events carried by the feed.
//!
//! An [`UpdateEvent`] pairs a kind-specific [`Payload`] with identity and
//! bookkeeping metadata: a display id, a sequence number, a creation timestamp
//! and the read flag.
//!
//! ## Ordering guarantees
//! Each event gets a process-wide sequence number (`seq`) that increases
//! monotonically at construction. The feed never reorders by `seq`; it is there
//! for consumers that merge events from several feeds.
//!
//! ## Example
//! ```rust
//! use crisisfeed::{EventKind, OfficialUpdate, Payload, UpdateEvent};
//!
//! let ev = UpdateEvent::new(
//!     "update_1700000000000_00ab",
//!     Payload::OfficialUpdate(OfficialUpdate {
//!         source_name: "Emergency Services".into(),
//!         title: "Situation Update".into(),
//!         related_disaster_id: "2".into(),
//!     }),
//! );
//!
//! assert_eq!(ev.kind(), EventKind::OfficialUpdate);
//! assert!(!ev.read);
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use super::payload::{EventKind, Payload};

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// One entry of the feed.
///
/// - `id`: display identity, used for list rendering and acknowledgment
/// - `seq`: monotonic global sequence
/// - `timestamp`: creation time, set once
/// - `read`: flipped only by `Feed::acknowledge`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateEvent {
    /// Display identity (`update_<millis>_<hex>` for generated events).
    pub id: String,
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Creation time.
    #[serde(serialize_with = "iso_millis")]
    pub timestamp: DateTime<Utc>,
    /// Whether a consumer has acknowledged this update.
    pub read: bool,
    /// Kind-specific data; serialized as `"type"` + `"data"`.
    #[serde(flatten)]
    pub payload: Payload,
}

impl UpdateEvent {
    /// Creates an unread event stamped with the current time and the next sequence number.
    pub fn new(id: impl Into<String>, payload: Payload) -> Self {
        Self {
            id: id.into(),
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            timestamp: Utc::now(),
            read: false,
            payload,
        }
    }

    /// Replaces the creation timestamp.
    #[inline]
    #[must_use]
    pub fn at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Classification of this update.
    #[inline]
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// Creation time as ISO-8601 with millisecond precision (`2024-01-15T16:30:00.000Z`).
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

fn iso_millis<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub(crate) fn iso_millis_opt<S: Serializer>(
    t: &Option<DateTime<Utc>>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match t {
        Some(t) => iso_millis(t, s),
        None => s.serialize_none(),
    }
}

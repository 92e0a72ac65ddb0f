//! # Point-in-time view of a feed for UI consumers.
//!
//! A [`FeedSnapshot`] carries exactly what a live indicator widget renders:
//! the history, the connectivity flag, the last update time and the unread
//! badge count. It serializes to the JSON shape dashboard widgets expect.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::FeedError;
use crate::events::{UpdateEvent, iso_millis_opt};

/// Consistent copy of a feed's queryable fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedSnapshot {
    /// Newest-first history.
    pub history: Vec<UpdateEvent>,
    /// Simulated connectivity flag.
    pub connected: bool,
    /// Timestamp of the most recent append, if any.
    #[serde(serialize_with = "iso_millis_opt")]
    pub last_update_at: Option<DateTime<Utc>>,
    /// Entries in `history` not yet acknowledged.
    pub unread: usize,
    /// Active registrations.
    pub subscribers: usize,
}

impl FeedSnapshot {
    /// Encodes the snapshot as JSON.
    pub fn to_json(&self) -> Result<String, FeedError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_json() {
        let snap = FeedSnapshot {
            history: Vec::new(),
            connected: true,
            last_update_at: None,
            unread: 0,
            subscribers: 0,
        };
        let json = snap.to_json().unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["connected"], true);
        assert!(v["last_update_at"].is_null());
        assert_eq!(v["history"].as_array().map(Vec::len), Some(0));
    }
}

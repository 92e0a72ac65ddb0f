//! Error types used by the crisisfeed library.
//!
//! Feed operations themselves are total: unknown ids, repeated unsubscribes and
//! duplicate publishes are reported through return values, never as errors.
//! [`FeedError`] only covers what can go wrong while **building** a feed:
//! bad configuration, unusable reference data, and snapshot encoding.
//!
//! Like the rest of the crate's error types it provides `as_label` / `as_message`
//! helpers for logs and metrics.

use thiserror::Error;

/// # Errors produced while constructing or exporting a feed.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum FeedError {
    /// A configuration field holds a value the feed cannot run with.
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig {
        /// Name of the offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A reference collection the sampler draws from is empty.
    #[error("reference collection `{collection}` is empty")]
    EmptyReference {
        /// Name of the empty collection.
        collection: &'static str,
    },

    /// A resource points at a disaster that is not in the reference set.
    #[error("resource `{resource}` references unknown disaster `{disaster}`")]
    DanglingReference {
        /// Resource id.
        resource: String,
        /// Disaster id it points at.
        disaster: String,
    },

    /// A snapshot could not be encoded.
    #[error("snapshot encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl FeedError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use crisisfeed::FeedError;
    ///
    /// let err = FeedError::EmptyReference { collection: "disasters" };
    /// assert_eq!(err.as_label(), "feed_empty_reference");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedError::InvalidConfig { .. } => "feed_invalid_config",
            FeedError::EmptyReference { .. } => "feed_empty_reference",
            FeedError::DanglingReference { .. } => "feed_dangling_reference",
            FeedError::Encode(_) => "feed_encode",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            FeedError::InvalidConfig { field, reason } => format!("config {field}: {reason}"),
            FeedError::EmptyReference { collection } => format!("empty: {collection}"),
            FeedError::DanglingReference { resource, disaster } => {
                format!("dangling: resource={resource} disaster={disaster}")
            }
            FeedError::Encode(e) => format!("encode: {e}"),
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        FeedError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

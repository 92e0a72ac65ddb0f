//! # Payload shapes and vocabularies.
//!
//! [`EventKind`] is the closed set of update classifications; [`Payload`] holds
//! the kind-specific record. The kind is always derived from the payload
//! variant, so the two cannot disagree.
//!
//! ## Wire shape
//! Payloads serialize adjacently tagged, the way dashboard widgets read them:
//! ```text
//! { "type": "new_report", "data": { "reporter_id": "responder_7", "priority": "high", ... } }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of update events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A post picked up from a social platform.
    ///
    /// Carries: platform, user handle, content snippet, related disaster.
    SocialMedia,

    /// A resource's availability changed.
    ///
    /// Carries: resource id, change kind, new available count.
    ResourceStatus,

    /// A statement from an official agency.
    ///
    /// Carries: source name, title, related disaster.
    OfficialUpdate,

    /// A field report filed by a responder.
    ///
    /// Carries: reporter id, priority, related disaster.
    NewReport,
}

impl EventKind {
    /// All kinds, in selection order used by the generator.
    pub const ALL: [EventKind; 4] = [
        EventKind::SocialMedia,
        EventKind::ResourceStatus,
        EventKind::OfficialUpdate,
        EventKind::NewReport,
    ];

    /// Stable snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::SocialMedia => "social_media",
            EventKind::ResourceStatus => "resource_status",
            EventKind::OfficialUpdate => "official_update",
            EventKind::NewReport => "new_report",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Report / disaster priority. Ordered `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// All priorities, lowest first.
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Social platforms the dashboard monitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Bluesky,
}

impl Platform {
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Bluesky,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Bluesky => "bluesky",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What changed about a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    CapacityUpdated,
}

/// Payload of a [`EventKind::SocialMedia`] update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMedia {
    pub platform: Platform,
    pub user_handle: String,
    pub content_snippet: String,
    pub related_disaster_id: String,
}

/// Payload of a [`EventKind::ResourceStatus`] update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStatus {
    pub resource_id: String,
    pub change_kind: ChangeKind,
    pub new_available_count: u32,
}

/// Payload of a [`EventKind::OfficialUpdate`] update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialUpdate {
    pub source_name: String,
    pub title: String,
    pub related_disaster_id: String,
}

/// Payload of a [`EventKind::NewReport`] update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    pub reporter_id: String,
    pub priority: Priority,
    pub related_disaster_id: String,
}

/// Kind-specific data of an update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Payload {
    SocialMedia(SocialMedia),
    ResourceStatus(ResourceStatus),
    OfficialUpdate(OfficialUpdate),
    NewReport(NewReport),
}

impl Payload {
    /// Classification derived from the variant.
    pub fn kind(&self) -> EventKind {
        match self {
            Payload::SocialMedia(_) => EventKind::SocialMedia,
            Payload::ResourceStatus(_) => EventKind::ResourceStatus,
            Payload::OfficialUpdate(_) => EventKind::OfficialUpdate,
            Payload::NewReport(_) => EventKind::NewReport,
        }
    }

    /// Disaster this update is about, if the kind carries one.
    pub fn related_disaster_id(&self) -> Option<&str> {
        match self {
            Payload::SocialMedia(p) => Some(&p.related_disaster_id),
            Payload::OfficialUpdate(p) => Some(&p.related_disaster_id),
            Payload::NewReport(p) => Some(&p.related_disaster_id),
            Payload::ResourceStatus(_) => None,
        }
    }
}

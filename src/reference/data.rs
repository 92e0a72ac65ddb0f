//! # Reference collections and their validation.

use std::collections::HashSet;

use crate::error::FeedError;
use crate::events::{Platform, Priority};

/// A disaster the feed can attach updates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisasterRef {
    pub id: String,
    pub title: String,
    pub location: String,
    pub priority: Priority,
}

impl DisasterRef {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        location: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: location.into(),
            priority,
        }
    }
}

/// A resource (shelter, medical hub, ...) whose availability can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub id: String,
    pub disaster_id: String,
    pub name: String,
    pub capacity: u32,
}

impl ResourceRef {
    pub fn new(
        id: impl Into<String>,
        disaster_id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            disaster_id: disaster_id.into(),
            name: name.into(),
            capacity,
        }
    }
}

/// Read-only input to the generator.
///
/// Collections are sampled uniformly. All of them must be non-empty and every
/// resource must point at a known disaster; see [`ReferenceData::validate`].
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Disasters updates may reference.
    pub disasters: Vec<DisasterRef>,
    /// Resources whose availability may change.
    pub resources: Vec<ResourceRef>,
    /// Platforms social updates may come from.
    pub platforms: Vec<Platform>,
    /// Priorities a field report may carry.
    pub priorities: Vec<Priority>,
    /// Agencies official updates may come from.
    pub official_sources: Vec<String>,
    /// Titles official updates may carry.
    pub official_titles: Vec<String>,
    /// Content snippets social updates may carry.
    pub social_snippets: Vec<String>,
}

impl ReferenceData {
    /// Creates reference data over the given disasters and resources with the
    /// built-in vocabularies.
    pub fn new(disasters: Vec<DisasterRef>, resources: Vec<ResourceRef>) -> Self {
        let mut data = Self::builtin();
        data.disasters = disasters;
        data.resources = resources;
        data
    }

    /// Returns true if `id` names a known disaster.
    pub fn contains_disaster(&self, id: &str) -> bool {
        self.disasters.iter().any(|d| d.id == id)
    }

    /// Returns true if `id` names a known resource.
    pub fn contains_resource(&self, id: &str) -> bool {
        self.resources.iter().any(|r| r.id == id)
    }

    /// Looks up a disaster by id.
    pub fn disaster(&self, id: &str) -> Option<&DisasterRef> {
        self.disasters.iter().find(|d| d.id == id)
    }

    /// Checks that every collection is non-empty and no resource dangles.
    pub fn validate(&self) -> Result<(), FeedError> {
        let collections = [
            ("disasters", self.disasters.is_empty()),
            ("resources", self.resources.is_empty()),
            ("platforms", self.platforms.is_empty()),
            ("priorities", self.priorities.is_empty()),
            ("official_sources", self.official_sources.is_empty()),
            ("official_titles", self.official_titles.is_empty()),
            ("social_snippets", self.social_snippets.is_empty()),
        ];
        if let Some(&(collection, _)) = collections.iter().find(|(_, empty)| *empty) {
            return Err(FeedError::EmptyReference { collection });
        }

        let known: HashSet<&str> = self.disasters.iter().map(|d| d.id.as_str()).collect();
        if let Some(r) = self
            .resources
            .iter()
            .find(|r| !known.contains(r.disaster_id.as_str()))
        {
            return Err(FeedError::DanglingReference {
                resource: r.id.clone(),
                disaster: r.disaster_id.clone(),
            });
        }
        Ok(())
    }
}

impl Default for ReferenceData {
    /// Same as [`ReferenceData::builtin`].
    fn default() -> Self {
        Self::builtin()
    }
}

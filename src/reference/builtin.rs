//! # Built-in reference dataset.
//!
//! The disasters and resources the coordination dashboard ships as demo data,
//! plus the vocabularies the generator uses for free-text fields.

use crate::events::{Platform, Priority};

use super::data::{DisasterRef, ReferenceData, ResourceRef};

const DISASTERS: &[(&str, &str, &str, Priority)] = &[
    ("1", "Maui Lahaina Wildfire Recovery", "Lahaina, Maui, HI", Priority::High),
    ("2", "Japan Noto Peninsula Earthquake", "Ishikawa Prefecture, Japan", Priority::Critical),
    ("3", "European Heat Dome Crisis", "Southern Europe", Priority::High),
    ("4", "Bangladesh Cyclone Remal", "Bangladesh Coast", Priority::Critical),
    ("5", "Chilean Forest Fire Emergency", "Valparaíso, Chile", Priority::High),
    ("6", "Australian Flash Flood Crisis", "Brisbane, QLD", Priority::Critical),
    ("7", "Turkey Earthquake Aftershocks", "Hatay Province, Turkey", Priority::Medium),
    ("8", "Philippines Volcano Alert", "Albay Province, Philippines", Priority::High),
];

const RESOURCES: &[(&str, &str, &str, u32)] = &[
    ("r1", "2", "Kanazawa Emergency Shelter", 800),
    ("r2", "4", "Chittagong Relief Distribution", 2000),
    ("r3", "6", "Brisbane Emergency Medical Hub", 150),
    ("r4", "5", "Valparaíso Firefighting Base", 50),
];

const OFFICIAL_SOURCES: &[&str] = &["Emergency Services"];
const OFFICIAL_TITLES: &[&str] = &["Situation Update"];
const SOCIAL_SNIPPETS: &[&str] = &["New emergency report detected..."];

impl ReferenceData {
    /// Returns the built-in dataset: eight disasters, four resources, all
    /// platforms and priorities, and the default free-text vocabularies.
    pub fn builtin() -> Self {
        Self {
            disasters: DISASTERS
                .iter()
                .map(|&(id, title, location, priority)| {
                    DisasterRef::new(id, title, location, priority)
                })
                .collect(),
            resources: RESOURCES
                .iter()
                .map(|&(id, disaster, name, capacity)| {
                    ResourceRef::new(id, disaster, name, capacity)
                })
                .collect(),
            platforms: Platform::ALL.to_vec(),
            priorities: Priority::ALL.to_vec(),
            official_sources: to_owned(OFFICIAL_SOURCES),
            official_titles: to_owned(OFFICIAL_TITLES),
            social_snippets: to_owned(SOCIAL_SNIPPETS),
        }
    }
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

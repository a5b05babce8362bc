//! Flat lookup tables: categories, manufacturers, tags, locations

use super::Record;
use crate::schema::{self, RecordSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Record for Category {
    const LABEL: &'static str = "Category";
    const SCHEMA: &'static RecordSchema = &schema::CATEGORY;

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manufacturer {
    pub id: String,
    pub name: String,
}

impl Record for Manufacturer {
    const LABEL: &'static str = "Manufacturer";
    const SCHEMA: &'static RecordSchema = &schema::MANUFACTURER;

    fn key(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

impl Record for Tag {
    const LABEL: &'static str = "Tag";
    const SCHEMA: &'static RecordSchema = &schema::TAG;

    fn key(&self) -> &str {
        &self.id
    }
}

/// A storage location; `description` is written only when set
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record for Location {
    const LABEL: &'static str = "Location";
    const SCHEMA: &'static RecordSchema = &schema::LOCATION;

    fn key(&self) -> &str {
        &self.id
    }
}

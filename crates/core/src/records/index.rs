//! Derived reverse-lookup indexes (tag/category/drawer -> part ids)
//!
//! Entries are keyed by their foreign id and are not kept in sync with the
//! parts collection by this crate.

use super::Record;
use crate::schema::{self, RecordSchema};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartsByTag {
    pub tag_id: String,
    #[serde(default)]
    pub part_ids: Vec<String>,
}

impl Record for PartsByTag {
    const LABEL: &'static str = "Parts by tag";
    const SCHEMA: &'static RecordSchema = &schema::PARTS_BY_TAG;

    fn key(&self) -> &str {
        &self.tag_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartsByCategory {
    pub category_id: String,
    #[serde(default)]
    pub part_ids: Vec<String>,
}

impl Record for PartsByCategory {
    const LABEL: &'static str = "Parts by category";
    const SCHEMA: &'static RecordSchema = &schema::PARTS_BY_CATEGORY;

    fn key(&self) -> &str {
        &self.category_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartsByDrawer {
    pub drawer_id: String,
    #[serde(default)]
    pub part_ids: Vec<String>,
}

impl Record for PartsByDrawer {
    const LABEL: &'static str = "Parts by drawer";
    const SCHEMA: &'static RecordSchema = &schema::PARTS_BY_DRAWER;

    fn key(&self) -> &str {
        &self.drawer_id
    }
}

//! Parts stocked in the rack

use super::Record;
use crate::schema::{self, RecordSchema};
use serde::{Deserialize, Serialize};

/// A stocked part
///
/// `quantity` is an integer with no range check; negative values load and
/// save like any other. `notes` is written only when set and `images` only
/// when non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Part {
    pub id: String,
    pub name: String,
    pub category_id: String,
    pub manufacturer_id: String,
    pub drawer_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub quantity: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl Part {
    /// Create a part with no notes and no images
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category_id: impl Into<String>,
        manufacturer_id: impl Into<String>,
        drawer_id: impl Into<String>,
        tags: Vec<String>,
        quantity: i64,
    ) -> Self {
        Part {
            id: id.into(),
            name: name.into(),
            category_id: category_id.into(),
            manufacturer_id: manufacturer_id.into(),
            drawer_id: drawer_id.into(),
            tags,
            quantity,
            notes: None,
            images: Vec::new(),
        }
    }

    /// Builder: set notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builder: set image references
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Whether the part carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Record for Part {
    const LABEL: &'static str = "Part";
    const SCHEMA: &'static RecordSchema = &schema::PART;

    fn key(&self) -> &str {
        &self.id
    }
}

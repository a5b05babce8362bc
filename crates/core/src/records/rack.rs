//! Physical rack layout: racks, drawers and the LED pixel range of a drawer

use super::Record;
use crate::schema::{self, RecordSchema};
use serde::{Deserialize, Serialize};

/// A rack of drawers driven by one WLED instance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Rack {
    pub id: String,
    pub name: String,
    pub wled_instance: String,
    pub rows: i64,
    pub drawers_per_row: i64,
}

impl Record for Rack {
    const LABEL: &'static str = "Rack";
    const SCHEMA: &'static RecordSchema = &schema::RACK;

    fn key(&self) -> &str {
        &self.id
    }
}

/// LED strip segment lighting one drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PixelRange {
    pub start: i64,
    pub count: i64,
}

/// A drawer at (row, col) of a rack
///
/// `rack_id` is not checked against the racks collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Drawer {
    pub id: String,
    pub rack_id: String,
    pub row: i64,
    pub col: i64,
    pub label: String,
    pub pixel_range: PixelRange,
}

impl Record for Drawer {
    const LABEL: &'static str = "Drawer";
    const SCHEMA: &'static RecordSchema = &schema::DRAWER;

    fn key(&self) -> &str {
        &self.id
    }
}

//! Movement ledgers: stock movements, adjustments and reservations
//!
//! Quantities and deltas are plain integers. Zero and negative values are
//! stored as given.

use super::Record;
use crate::schema::{self, RecordSchema};
use serde::{Deserialize, Serialize};

/// Stock moved in or out for a part
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StockMovement {
    pub id: String,
    pub part_id: String,
    #[serde(rename = "type")]
    pub movement_type: String,
    pub qty: i64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record for StockMovement {
    const LABEL: &'static str = "Stock movement";
    const SCHEMA: &'static RecordSchema = &schema::STOCK_MOVEMENT;

    fn key(&self) -> &str {
        &self.id
    }
}

/// Signed correction to a part's count
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Adjustment {
    pub id: String,
    pub part_id: String,
    pub delta: i64,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Record for Adjustment {
    const LABEL: &'static str = "Adjustment";
    const SCHEMA: &'static RecordSchema = &schema::ADJUSTMENT;

    fn key(&self) -> &str {
        &self.id
    }
}

/// Quantity of a part held for some purpose
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Reservation {
    pub id: String,
    pub part_id: String,
    pub qty: i64,
    pub status: String,
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Record for Reservation {
    const LABEL: &'static str = "Reservation";
    const SCHEMA: &'static RecordSchema = &schema::RESERVATION;

    fn key(&self) -> &str {
        &self.id
    }
}

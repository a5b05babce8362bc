//! Record model
//!
//! One plain value type per record kind. Field names on the wire are camelCase
//! and must never change; serde attributes carry that mapping. Optional
//! attributes are omitted from the map form when absent or empty, so a
//! load/save cycle never introduces keys that were not in the file.
//!
//! Parsing a record (`from_map`) fails on missing or mistyped keys even though
//! the collection has already passed [`validate_collection`](crate::schema::validate_collection);
//! the two checks are independent.

mod index;
mod lookup;
mod movement;
mod part;
mod rack;

pub use index::{PartsByCategory, PartsByDrawer, PartsByTag};
pub use lookup::{Category, Location, Manufacturer, Tag};
pub use movement::{Adjustment, Reservation, StockMovement};
pub use part::Part;
pub use rack::{Drawer, PixelRange, Rack};

use crate::schema::RecordSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A record kind stored as one JSON-file collection
///
/// Implementors are immutable values with structural equality. The trait
/// ties a kind to its schema, its error label and its primary key, which is
/// all the generic store and CRUD layers need.
pub trait Record: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned {
    /// Human-readable label used in error messages
    const LABEL: &'static str;

    /// Shape every element of the collection must satisfy on load and save
    const SCHEMA: &'static RecordSchema;

    /// Primary key. For derived indexes this is the foreign id the entry is keyed by.
    fn key(&self) -> &str;

    /// Parse from the generic map form
    fn from_map(map: Map<String, Value>) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(map))
    }

    /// Render to the generic map form, keys in wire order
    fn to_map(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "{} rendered as {}, expected an object",
                Self::LABEL,
                crate::schema::type_name(&other)
            ))),
        }
    }
}

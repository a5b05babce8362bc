//! Core types and traits for rackstore
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Error: error taxonomy (schema, not-found, already-exists, I/O)
//! - Schema: declarative record schemas and the generic structural validator
//! - Records: the eleven record kinds and the `Record` trait
//! - Traits: the `Collection` load/save seam

#![warn(clippy::all)]

pub mod error;
pub mod records;
pub mod schema;
pub mod traits;

pub use error::{Error, Result, SchemaError};
pub use records::{
    Adjustment, Category, Drawer, Location, Manufacturer, Part, PartsByCategory, PartsByDrawer,
    PartsByTag, PixelRange, Rack, Record, Reservation, StockMovement, Tag,
};
pub use schema::{validate_collection, validate_record, FieldKind, FieldSpec, RecordSchema};
pub use traits::Collection;

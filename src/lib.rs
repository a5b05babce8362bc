//! Rackstore - validated JSON-file inventory store for a light-guided parts rack
//!
//! Racks, drawers, parts and their lookup tables, the stock movement ledgers
//! and the derived part indexes each live in one JSON file under a
//! repository root. Every load is validated against the record's schema and
//! every save is validated before it reaches the disk.
//!
//! # Quick Start
//!
//! ```ignore
//! use rackstore::{MasterDataService, Part};
//!
//! let service = MasterDataService::from_root("/srv/rack");
//! service.create_part(Part::new("p1", "Resistor 1k", "cat-res", "mfg-1", "drawer-a", vec![], 100))?;
//! let part = service.get_part("p1")?;
//! ```
//!
//! # Architecture
//!
//! - `rackstore-core`: errors, record model, schema validator
//! - `rackstore-storage`: file layout and the three JSON stores
//! - `rackstore-engine`: keyed CRUD services over the stores
//! - `rackstore-search`: part search over the master data

pub use rackstore_core::*;
pub use rackstore_engine::*;
pub use rackstore_search::*;
pub use rackstore_storage::*;

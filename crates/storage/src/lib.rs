//! Storage layer for rackstore
//!
//! This crate is the only part of the system that touches the filesystem:
//! - Layout: where each collection file lives under the repository root
//! - JsonCollection: whole-file load/validate/parse and render/validate/write
//!   for one record kind
//! - Three stores grouping the collections: master data, movements, indexes
//!
//! Every mutation is a whole-collection rewrite. There is no cache and no
//! locking; a single writer process is assumed.

#![warn(clippy::all)]

pub mod collection;
pub mod indexes;
pub mod layout;
pub mod master;
pub mod movement;

pub use collection::JsonCollection;
pub use indexes::JsonIndexDataStore;
pub use layout::{validate_period, IndexDataPaths, MasterDataPaths, MovementDataPaths};
pub use master::JsonMasterDataStore;
pub use movement::JsonMovementDataStore;

//! Part search for rackstore
//!
//! A thin read-only consumer of the master data store: load every part,
//! keep the ones matching a [`PartSearchCriteria`].

#![warn(clippy::all)]

pub mod criteria;
pub mod service;

pub use criteria::PartSearchCriteria;
pub use service::{PartSearchService, PartSource};

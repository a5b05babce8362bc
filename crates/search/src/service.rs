//! PartSearchService: filter the parts collection by criteria

use crate::criteria::PartSearchCriteria;
use rackstore_core::{Part, Result};
use rackstore_storage::JsonMasterDataStore;

/// Read-only source of the full, ordered parts list
pub trait PartSource {
    fn load_parts(&self) -> Result<Vec<Part>>;
}

impl PartSource for JsonMasterDataStore {
    fn load_parts(&self) -> Result<Vec<Part>> {
        JsonMasterDataStore::load_parts(self)
    }
}

impl<S: PartSource + ?Sized> PartSource for &S {
    fn load_parts(&self) -> Result<Vec<Part>> {
        (**self).load_parts()
    }
}

/// In-memory predicate filter over every part
///
/// Loads the whole collection on each search and returns matches in file
/// order. Never writes.
#[derive(Debug, Clone)]
pub struct PartSearchService<S = JsonMasterDataStore> {
    source: S,
}

impl<S: PartSource> PartSearchService<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Parts satisfying every criterion, in file order
    pub fn search_parts(&self, criteria: &PartSearchCriteria) -> Result<Vec<Part>> {
        let parts = self.source.load_parts()?;
        Ok(parts
            .into_iter()
            .filter(|part| criteria.matches(part))
            .collect())
    }
}

//! Index data store: the three derived part indexes

use crate::collection::JsonCollection;
use crate::layout::IndexDataPaths;
use rackstore_core::{Collection, PartsByCategory, PartsByDrawer, PartsByTag, Result};
use std::path::Path;

/// JSON-file store for parts-by-tag, parts-by-category and parts-by-drawer
///
/// The indexes are stored like any other collection. Nothing here rebuilds
/// them from the parts collection.
#[derive(Debug, Clone)]
pub struct JsonIndexDataStore {
    paths: IndexDataPaths,
}

impl JsonIndexDataStore {
    /// Store rooted at a repository root (`<root>/data/indexes/*.json`)
    pub fn new(root: impl AsRef<Path>) -> Self {
        JsonIndexDataStore {
            paths: IndexDataPaths::from_root(root),
        }
    }

    pub fn paths(&self) -> &IndexDataPaths {
        &self.paths
    }

    pub fn parts_by_tag(&self) -> JsonCollection<PartsByTag> {
        JsonCollection::new(&self.paths.parts_by_tag)
    }

    pub fn parts_by_category(&self) -> JsonCollection<PartsByCategory> {
        JsonCollection::new(&self.paths.parts_by_category)
    }

    pub fn parts_by_drawer(&self) -> JsonCollection<PartsByDrawer> {
        JsonCollection::new(&self.paths.parts_by_drawer)
    }

    pub fn load_parts_by_tag(&self) -> Result<Vec<PartsByTag>> {
        self.parts_by_tag().load()
    }

    pub fn save_parts_by_tag(&self, items: &[PartsByTag]) -> Result<()> {
        self.parts_by_tag().save(items)
    }

    pub fn load_parts_by_category(&self) -> Result<Vec<PartsByCategory>> {
        self.parts_by_category().load()
    }

    pub fn save_parts_by_category(&self, items: &[PartsByCategory]) -> Result<()> {
        self.parts_by_category().save(items)
    }

    pub fn load_parts_by_drawer(&self) -> Result<Vec<PartsByDrawer>> {
        self.parts_by_drawer().load()
    }

    pub fn save_parts_by_drawer(&self, items: &[PartsByDrawer]) -> Result<()> {
        self.parts_by_drawer().save(items)
    }
}

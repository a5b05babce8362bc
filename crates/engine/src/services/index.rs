//! IndexDataService: keyed CRUD over the derived part indexes
//!
//! Index records are keyed by their foreign id (`tagId`, `categoryId`,
//! `drawerId`). Nothing here keeps them in sync with the parts collection.

use crate::crud;
use rackstore_core::{PartsByCategory, PartsByDrawer, PartsByTag, Result};
use rackstore_storage::JsonIndexDataStore;
use std::path::Path;

/// CRUD for parts-by-tag, parts-by-category and parts-by-drawer
#[derive(Debug, Clone)]
pub struct IndexDataService {
    store: JsonIndexDataStore,
}

impl IndexDataService {
    pub fn new(store: JsonIndexDataStore) -> Self {
        Self { store }
    }

    /// Service over the store rooted at `root`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::new(JsonIndexDataStore::new(root))
    }

    pub fn store(&self) -> &JsonIndexDataStore {
        &self.store
    }

    pub fn list_parts_by_tag(&self) -> Result<Vec<PartsByTag>> {
        crud::list(&self.store.parts_by_tag())
    }

    pub fn get_parts_by_tag(&self, tag_id: &str) -> Result<PartsByTag> {
        crud::get(&self.store.parts_by_tag(), tag_id)
    }

    pub fn create_parts_by_tag(&self, entry: PartsByTag) -> Result<PartsByTag> {
        crud::create(&self.store.parts_by_tag(), entry)
    }

    pub fn update_parts_by_tag(&self, entry: PartsByTag) -> Result<PartsByTag> {
        crud::update(&self.store.parts_by_tag(), entry)
    }

    pub fn delete_parts_by_tag(&self, tag_id: &str) -> Result<()> {
        crud::delete(&self.store.parts_by_tag(), tag_id)
    }

    pub fn list_parts_by_category(&self) -> Result<Vec<PartsByCategory>> {
        crud::list(&self.store.parts_by_category())
    }

    pub fn get_parts_by_category(&self, category_id: &str) -> Result<PartsByCategory> {
        crud::get(&self.store.parts_by_category(), category_id)
    }

    pub fn create_parts_by_category(&self, entry: PartsByCategory) -> Result<PartsByCategory> {
        crud::create(&self.store.parts_by_category(), entry)
    }

    pub fn update_parts_by_category(&self, entry: PartsByCategory) -> Result<PartsByCategory> {
        crud::update(&self.store.parts_by_category(), entry)
    }

    pub fn delete_parts_by_category(&self, category_id: &str) -> Result<()> {
        crud::delete(&self.store.parts_by_category(), category_id)
    }

    pub fn list_parts_by_drawer(&self) -> Result<Vec<PartsByDrawer>> {
        crud::list(&self.store.parts_by_drawer())
    }

    pub fn get_parts_by_drawer(&self, drawer_id: &str) -> Result<PartsByDrawer> {
        crud::get(&self.store.parts_by_drawer(), drawer_id)
    }

    pub fn create_parts_by_drawer(&self, entry: PartsByDrawer) -> Result<PartsByDrawer> {
        crud::create(&self.store.parts_by_drawer(), entry)
    }

    pub fn update_parts_by_drawer(&self, entry: PartsByDrawer) -> Result<PartsByDrawer> {
        crud::update(&self.store.parts_by_drawer(), entry)
    }

    pub fn delete_parts_by_drawer(&self, drawer_id: &str) -> Result<()> {
        crud::delete(&self.store.parts_by_drawer(), drawer_id)
    }
}

//! MasterDataService: keyed CRUD over racks, drawers, parts and lookups

use crate::crud;
use rackstore_core::{Category, Drawer, Location, Manufacturer, Part, Rack, Result, Tag};
use rackstore_storage::JsonMasterDataStore;
use std::path::Path;

/// CRUD for the seven master data collections
///
/// Stateless: every call re-reads the collection file, and every mutation
/// rewrites it.
#[derive(Debug, Clone)]
pub struct MasterDataService {
    store: JsonMasterDataStore,
}

impl MasterDataService {
    pub fn new(store: JsonMasterDataStore) -> Self {
        Self { store }
    }

    /// Service over the store rooted at `root`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::new(JsonMasterDataStore::new(root))
    }

    pub fn store(&self) -> &JsonMasterDataStore {
        &self.store
    }

    // ========== Racks ==========

    pub fn list_racks(&self) -> Result<Vec<Rack>> {
        crud::list(&self.store.racks())
    }

    pub fn get_rack(&self, rack_id: &str) -> Result<Rack> {
        crud::get(&self.store.racks(), rack_id)
    }

    pub fn create_rack(&self, rack: Rack) -> Result<Rack> {
        crud::create(&self.store.racks(), rack)
    }

    pub fn update_rack(&self, rack: Rack) -> Result<Rack> {
        crud::update(&self.store.racks(), rack)
    }

    pub fn delete_rack(&self, rack_id: &str) -> Result<()> {
        crud::delete(&self.store.racks(), rack_id)
    }

    // ========== Drawers ==========

    pub fn list_drawers(&self) -> Result<Vec<Drawer>> {
        crud::list(&self.store.drawers())
    }

    pub fn get_drawer(&self, drawer_id: &str) -> Result<Drawer> {
        crud::get(&self.store.drawers(), drawer_id)
    }

    pub fn create_drawer(&self, drawer: Drawer) -> Result<Drawer> {
        crud::create(&self.store.drawers(), drawer)
    }

    pub fn update_drawer(&self, drawer: Drawer) -> Result<Drawer> {
        crud::update(&self.store.drawers(), drawer)
    }

    pub fn delete_drawer(&self, drawer_id: &str) -> Result<()> {
        crud::delete(&self.store.drawers(), drawer_id)
    }

    // ========== Parts ==========

    pub fn list_parts(&self) -> Result<Vec<Part>> {
        crud::list(&self.store.parts())
    }

    pub fn get_part(&self, part_id: &str) -> Result<Part> {
        crud::get(&self.store.parts(), part_id)
    }

    pub fn create_part(&self, part: Part) -> Result<Part> {
        crud::create(&self.store.parts(), part)
    }

    pub fn update_part(&self, part: Part) -> Result<Part> {
        crud::update(&self.store.parts(), part)
    }

    pub fn delete_part(&self, part_id: &str) -> Result<()> {
        crud::delete(&self.store.parts(), part_id)
    }

    // ========== Categories ==========

    pub fn list_categories(&self) -> Result<Vec<Category>> {
        crud::list(&self.store.categories())
    }

    pub fn get_category(&self, category_id: &str) -> Result<Category> {
        crud::get(&self.store.categories(), category_id)
    }

    pub fn create_category(&self, category: Category) -> Result<Category> {
        crud::create(&self.store.categories(), category)
    }

    pub fn update_category(&self, category: Category) -> Result<Category> {
        crud::update(&self.store.categories(), category)
    }

    pub fn delete_category(&self, category_id: &str) -> Result<()> {
        crud::delete(&self.store.categories(), category_id)
    }

    // ========== Manufacturers ==========

    pub fn list_manufacturers(&self) -> Result<Vec<Manufacturer>> {
        crud::list(&self.store.manufacturers())
    }

    pub fn get_manufacturer(&self, manufacturer_id: &str) -> Result<Manufacturer> {
        crud::get(&self.store.manufacturers(), manufacturer_id)
    }

    pub fn create_manufacturer(&self, manufacturer: Manufacturer) -> Result<Manufacturer> {
        crud::create(&self.store.manufacturers(), manufacturer)
    }

    pub fn update_manufacturer(&self, manufacturer: Manufacturer) -> Result<Manufacturer> {
        crud::update(&self.store.manufacturers(), manufacturer)
    }

    pub fn delete_manufacturer(&self, manufacturer_id: &str) -> Result<()> {
        crud::delete(&self.store.manufacturers(), manufacturer_id)
    }

    // ========== Tags ==========

    pub fn list_tags(&self) -> Result<Vec<Tag>> {
        crud::list(&self.store.tags())
    }

    pub fn get_tag(&self, tag_id: &str) -> Result<Tag> {
        crud::get(&self.store.tags(), tag_id)
    }

    pub fn create_tag(&self, tag: Tag) -> Result<Tag> {
        crud::create(&self.store.tags(), tag)
    }

    pub fn update_tag(&self, tag: Tag) -> Result<Tag> {
        crud::update(&self.store.tags(), tag)
    }

    pub fn delete_tag(&self, tag_id: &str) -> Result<()> {
        crud::delete(&self.store.tags(), tag_id)
    }

    // ========== Locations ==========

    pub fn list_locations(&self) -> Result<Vec<Location>> {
        crud::list(&self.store.locations())
    }

    pub fn get_location(&self, location_id: &str) -> Result<Location> {
        crud::get(&self.store.locations(), location_id)
    }

    pub fn create_location(&self, location: Location) -> Result<Location> {
        crud::create(&self.store.locations(), location)
    }

    pub fn update_location(&self, location: Location) -> Result<Location> {
        crud::update(&self.store.locations(), location)
    }

    pub fn delete_location(&self, location_id: &str) -> Result<()> {
        crud::delete(&self.store.locations(), location_id)
    }
}

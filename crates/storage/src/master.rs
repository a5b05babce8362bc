//! Master data store: racks, drawers, parts and the lookup tables

use crate::collection::JsonCollection;
use crate::layout::MasterDataPaths;
use rackstore_core::{
    Category, Collection, Drawer, Location, Manufacturer, Part, Rack, Result, Tag,
};
use std::path::Path;

/// JSON-file store for the seven master data collections
#[derive(Debug, Clone)]
pub struct JsonMasterDataStore {
    paths: MasterDataPaths,
}

impl JsonMasterDataStore {
    /// Store rooted at a repository root (`<root>/data/master/*.json`)
    pub fn new(root: impl AsRef<Path>) -> Self {
        JsonMasterDataStore {
            paths: MasterDataPaths::from_root(root),
        }
    }

    pub fn paths(&self) -> &MasterDataPaths {
        &self.paths
    }

    pub fn racks(&self) -> JsonCollection<Rack> {
        JsonCollection::new(&self.paths.racks)
    }

    pub fn drawers(&self) -> JsonCollection<Drawer> {
        JsonCollection::new(&self.paths.drawers)
    }

    pub fn parts(&self) -> JsonCollection<Part> {
        JsonCollection::new(&self.paths.parts)
    }

    pub fn categories(&self) -> JsonCollection<Category> {
        JsonCollection::new(&self.paths.categories)
    }

    pub fn manufacturers(&self) -> JsonCollection<Manufacturer> {
        JsonCollection::new(&self.paths.manufacturers)
    }

    pub fn tags(&self) -> JsonCollection<Tag> {
        JsonCollection::new(&self.paths.tags)
    }

    pub fn locations(&self) -> JsonCollection<Location> {
        JsonCollection::new(&self.paths.locations)
    }

    pub fn load_racks(&self) -> Result<Vec<Rack>> {
        self.racks().load()
    }

    pub fn save_racks(&self, racks: &[Rack]) -> Result<()> {
        self.racks().save(racks)
    }

    pub fn load_drawers(&self) -> Result<Vec<Drawer>> {
        self.drawers().load()
    }

    pub fn save_drawers(&self, drawers: &[Drawer]) -> Result<()> {
        self.drawers().save(drawers)
    }

    /// Every part in file order. This is the read boundary the search
    /// service and the web UI consume.
    pub fn load_parts(&self) -> Result<Vec<Part>> {
        self.parts().load()
    }

    pub fn save_parts(&self, parts: &[Part]) -> Result<()> {
        self.parts().save(parts)
    }

    pub fn load_categories(&self) -> Result<Vec<Category>> {
        self.categories().load()
    }

    pub fn save_categories(&self, categories: &[Category]) -> Result<()> {
        self.categories().save(categories)
    }

    pub fn load_manufacturers(&self) -> Result<Vec<Manufacturer>> {
        self.manufacturers().load()
    }

    pub fn save_manufacturers(&self, manufacturers: &[Manufacturer]) -> Result<()> {
        self.manufacturers().save(manufacturers)
    }

    pub fn load_tags(&self) -> Result<Vec<Tag>> {
        self.tags().load()
    }

    pub fn save_tags(&self, tags: &[Tag]) -> Result<()> {
        self.tags().save(tags)
    }

    pub fn load_locations(&self) -> Result<Vec<Location>> {
        self.locations().load()
    }

    pub fn save_locations(&self, locations: &[Location]) -> Result<()> {
        self.locations().save(locations)
    }
}

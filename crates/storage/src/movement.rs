//! Movement data store: period-partitioned ledgers plus reservations
//!
//! `save_stock_movements("202401", ..)` touches exactly one file,
//! `stock_movements_202401.json`. Invalid periods fail with
//! `Error::InvalidPeriod` before any I/O.

use crate::collection::JsonCollection;
use crate::layout::MovementDataPaths;
use rackstore_core::{Adjustment, Collection, Reservation, Result, StockMovement};
use std::path::Path;

/// JSON-file store for stock movements, adjustments and reservations
#[derive(Debug, Clone)]
pub struct JsonMovementDataStore {
    paths: MovementDataPaths,
}

impl JsonMovementDataStore {
    /// Store rooted at a repository root (`<root>/data/movements/*.json`)
    pub fn new(root: impl AsRef<Path>) -> Self {
        JsonMovementDataStore {
            paths: MovementDataPaths::from_root(root),
        }
    }

    pub fn paths(&self) -> &MovementDataPaths {
        &self.paths
    }

    /// Stock movements of one period
    pub fn stock_movements(&self, period: &str) -> Result<JsonCollection<StockMovement>> {
        Ok(JsonCollection::new(self.paths.stock_movements(period)?))
    }

    /// Adjustments of one period
    pub fn adjustments(&self, period: &str) -> Result<JsonCollection<Adjustment>> {
        Ok(JsonCollection::new(self.paths.adjustments(period)?))
    }

    pub fn reservations(&self) -> JsonCollection<Reservation> {
        JsonCollection::new(self.paths.reservations())
    }

    pub fn load_stock_movements(&self, period: &str) -> Result<Vec<StockMovement>> {
        self.stock_movements(period)?.load()
    }

    pub fn save_stock_movements(&self, period: &str, movements: &[StockMovement]) -> Result<()> {
        self.stock_movements(period)?.save(movements)
    }

    pub fn load_adjustments(&self, period: &str) -> Result<Vec<Adjustment>> {
        self.adjustments(period)?.load()
    }

    pub fn save_adjustments(&self, period: &str, adjustments: &[Adjustment]) -> Result<()> {
        self.adjustments(period)?.save(adjustments)
    }

    pub fn load_reservations(&self) -> Result<Vec<Reservation>> {
        self.reservations().load()
    }

    pub fn save_reservations(&self, reservations: &[Reservation]) -> Result<()> {
        self.reservations().save(reservations)
    }
}

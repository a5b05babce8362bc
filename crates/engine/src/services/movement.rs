//! MovementDataService: keyed CRUD over the movement ledgers
//!
//! Stock movements and adjustments take the period whose file they act on.
//! A record's key only has to be unique within its period.

use crate::crud;
use rackstore_core::{Adjustment, Reservation, Result, StockMovement};
use rackstore_storage::JsonMovementDataStore;
use std::path::Path;

/// CRUD for stock movements, adjustments and reservations
#[derive(Debug, Clone)]
pub struct MovementDataService {
    store: JsonMovementDataStore,
}

impl MovementDataService {
    pub fn new(store: JsonMovementDataStore) -> Self {
        Self { store }
    }

    /// Service over the store rooted at `root`
    pub fn from_root(root: impl AsRef<Path>) -> Self {
        Self::new(JsonMovementDataStore::new(root))
    }

    pub fn store(&self) -> &JsonMovementDataStore {
        &self.store
    }

    // ========== Stock movements ==========

    pub fn list_stock_movements(&self, period: &str) -> Result<Vec<StockMovement>> {
        crud::list(&self.store.stock_movements(period)?)
    }

    pub fn get_stock_movement(&self, period: &str, movement_id: &str) -> Result<StockMovement> {
        crud::get(&self.store.stock_movements(period)?, movement_id)
    }

    pub fn create_stock_movement(
        &self,
        period: &str,
        movement: StockMovement,
    ) -> Result<StockMovement> {
        crud::create(&self.store.stock_movements(period)?, movement)
    }

    pub fn update_stock_movement(
        &self,
        period: &str,
        movement: StockMovement,
    ) -> Result<StockMovement> {
        crud::update(&self.store.stock_movements(period)?, movement)
    }

    pub fn delete_stock_movement(&self, period: &str, movement_id: &str) -> Result<()> {
        crud::delete(&self.store.stock_movements(period)?, movement_id)
    }

    // ========== Adjustments ==========

    pub fn list_adjustments(&self, period: &str) -> Result<Vec<Adjustment>> {
        crud::list(&self.store.adjustments(period)?)
    }

    pub fn get_adjustment(&self, period: &str, adjustment_id: &str) -> Result<Adjustment> {
        crud::get(&self.store.adjustments(period)?, adjustment_id)
    }

    pub fn create_adjustment(&self, period: &str, adjustment: Adjustment) -> Result<Adjustment> {
        crud::create(&self.store.adjustments(period)?, adjustment)
    }

    pub fn update_adjustment(&self, period: &str, adjustment: Adjustment) -> Result<Adjustment> {
        crud::update(&self.store.adjustments(period)?, adjustment)
    }

    pub fn delete_adjustment(&self, period: &str, adjustment_id: &str) -> Result<()> {
        crud::delete(&self.store.adjustments(period)?, adjustment_id)
    }

    // ========== Reservations ==========

    pub fn list_reservations(&self) -> Result<Vec<Reservation>> {
        crud::list(&self.store.reservations())
    }

    pub fn get_reservation(&self, reservation_id: &str) -> Result<Reservation> {
        crud::get(&self.store.reservations(), reservation_id)
    }

    pub fn create_reservation(&self, reservation: Reservation) -> Result<Reservation> {
        crud::create(&self.store.reservations(), reservation)
    }

    pub fn update_reservation(&self, reservation: Reservation) -> Result<Reservation> {
        crud::update(&self.store.reservations(), reservation)
    }

    pub fn delete_reservation(&self, reservation_id: &str) -> Result<()> {
        crud::delete(&self.store.reservations(), reservation_id)
    }
}

//! The three CRUD services, one per store

pub mod index;
pub mod master;
pub mod movement;

pub use index::IndexDataService;
pub use master::MasterDataService;
pub use movement::MovementDataService;

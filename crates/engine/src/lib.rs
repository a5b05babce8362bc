//! CRUD engine for rackstore
//!
//! This crate layers keyed create/get/update/delete semantics over the
//! storage collections:
//! - `crud`: the generic operations, written once for every record kind
//! - `services`: master, movement and index services exposing them per kind
//!
//! Every operation is a fresh load before and a full save after. Callers
//! needing several changes make several round trips.

#![warn(clippy::all)]

pub mod crud;
pub mod services;

pub use services::{IndexDataService, MasterDataService, MovementDataService};

//! Engine integration tests: keyed CRUD over real collection files.

#[path = "../common/mod.rs"]
mod common;

mod crud_invariants;
mod services;

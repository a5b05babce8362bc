//! Storage integration tests: on-disk format, validation and partitioning.

#[path = "../common/mod.rs"]
mod common;

mod validation;

//! Testing infrastructure for recipebox integration tests.
//!
//! - `TestWorld`: isolated data dir, catalog files and CLI execution
//! - `assertions`: checks against the JSON result envelope
//! - `fixtures`: sample catalogs

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};

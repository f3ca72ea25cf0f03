// Testmode - core/mod.rs
//
// Core business logic layer.
// Pure functions over strings and lists; parsing accepts string content.
// Must NOT depend on: platform, or any I/O crate directly.

pub mod filter;
pub mod like;
pub mod lines;
pub mod model;
pub mod report;
pub mod settings;

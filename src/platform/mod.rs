// Testmode - platform/mod.rs
//
// Platform abstraction layer.
// Dependencies: standard library, directories crate.
// Must NOT depend on: core.

pub mod config;

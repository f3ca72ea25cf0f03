// Testmode - util/mod.rs
//
// Utility modules: error types, named constants, logging setup.
// No dependencies on core or platform layers.

pub mod constants;
pub mod error;
pub mod logging;

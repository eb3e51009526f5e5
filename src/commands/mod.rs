//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation.

pub mod config;
pub mod find;
pub mod list;

// Re-export execute functions for convenience
pub use find::execute as find;
pub use list::execute as list;

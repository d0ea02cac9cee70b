//! Infrastructure adapters for Zookeep.
//!
//! This crate implements the ports defined in `zookeep-core::application::ports`
//! and ships the built-in sample data. Anything that touches the outside
//! world (stdout, future persistence) lives here, never in core.

pub mod directory;
pub mod reporter;
pub mod sample;

// Re-export commonly used adapters
pub use directory::InMemoryDirectory;
pub use reporter::{ConsoleReporter, MemoryReporter};

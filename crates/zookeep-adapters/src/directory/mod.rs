//! Employee directory adapters.

mod memory;

pub use memory::InMemoryDirectory;

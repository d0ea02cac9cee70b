//! Reporter adapters.

mod console;
mod memory;

pub use console::ConsoleReporter;
pub use memory::MemoryReporter;

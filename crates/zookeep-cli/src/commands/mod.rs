//! Command handlers.
//!
//! Each submodule owns one subcommand: it wires adapters to core services,
//! runs them, and renders the result through the [`OutputManager`].
//!
//! [`OutputManager`]: crate::output::OutputManager

pub mod completions;
pub mod payroll;
pub mod zoo;

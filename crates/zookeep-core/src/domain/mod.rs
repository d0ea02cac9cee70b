// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Zookeep.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! Emitting output (console, logs) is handled via ports (traits) defined in
//! the application layer — domain behaviors *describe*, they never print.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable entities in practice**: the roster is read-only reference
//!   data; every query returns a freshly derived collection
//! - **Rich domain model**: Behavior lives in entities, not services

// Public API - what the world sees
pub mod behavior;
pub mod employee;
pub mod error;
pub mod organism;
pub mod pipeline;
pub mod zoo;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use employee::{Employee, SalaryBracket};
pub use organism::{Animal, AnimalKind, Organism, Plant};
pub use zoo::Zoo;

pub use error::{DomainError, ErrorCategory};

// Internal only - not re-exported through the prelude
pub use validation::DomainValidator;

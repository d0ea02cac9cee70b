//! Zookeep Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Zookeep
//! zoo-management sampler, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          zookeep-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (PayrollService, ExhibitService)      │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: EmployeeDirectory, Reporter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     zookeep-adapters (Infrastructure)   │
//! │  (InMemoryDirectory, ConsoleReporter)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │   (Organism, Animal, Plant, Zoo,        │
//! │    Employee, query pipeline)            │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! # use zookeep_core::prelude::*;
//! # struct Roster;
//! # impl EmployeeDirectory for Roster {
//! #     fn all(&self) -> ZookeepResult<Vec<Employee>> {
//! #         Ok(vec![Employee::new("John", 50_000)])
//! #     }
//! #     fn insert(&self, _employee: Employee) -> ZookeepResult<()> { Ok(()) }
//! #     fn clear(&self) -> ZookeepResult<()> { Ok(()) }
//! # }
//! use zookeep_core::{application::PayrollService, domain::SalaryBracket};
//!
//! // 1. Build a service over an injected directory adapter
//! let service = PayrollService::new(Box::new(Roster));
//!
//! // 2. Derive views of the roster
//! let sorted = service.sorted_by_salary().unwrap();
//! let upper = service.in_bracket(SalaryBracket::Upper).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ExhibitService, PayrollService,
        ports::{EmployeeDirectory, Reporter},
    };
    pub use crate::domain::{
        Animal, AnimalKind, Employee, Organism, Plant, SalaryBracket, Zoo, pipeline,
    };
    pub use crate::error::{ZookeepError, ZookeepResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

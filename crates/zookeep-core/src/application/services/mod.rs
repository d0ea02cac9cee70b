//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "sort the roster" or "present the zoo".

pub mod exhibit_service;
pub mod payroll_service;

pub use exhibit_service::ExhibitService;
pub use payroll_service::PayrollService;

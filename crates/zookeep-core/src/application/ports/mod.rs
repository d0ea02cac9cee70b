//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `zookeep-adapters` crate provides implementations.

use crate::domain::Employee;
use crate::error::ZookeepResult;

/// Port for the staff directory.
///
/// Implemented by:
/// - `zookeep_adapters::directory::InMemoryDirectory` (built-in roster)
///
/// ## Design Notes
///
/// - Read paths return owned snapshots; callers never observe interior state
/// - Records are validated on insert, so `all()` only yields valid employees
pub trait EmployeeDirectory: Send + Sync {
    /// A snapshot of every employee, in insertion order.
    fn all(&self) -> ZookeepResult<Vec<Employee>>;

    /// Insert a record after validating it.
    fn insert(&self, employee: Employee) -> ZookeepResult<()>;

    /// Remove every record.
    fn clear(&self) -> ZookeepResult<()>;
}

/// Port for emitting report lines.
///
/// Implemented by:
/// - `zookeep_adapters::reporter::ConsoleReporter` (production)
/// - `zookeep_adapters::reporter::MemoryReporter` (testing)
pub trait Reporter: Send + Sync {
    /// Emit one line of report output.
    fn report(&self, line: &str) -> ZookeepResult<()>;
}

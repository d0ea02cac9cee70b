//! Payroll Service - roster query orchestration.
//!
//! Thin orchestration over the pure pipeline in `domain::pipeline`: fetch a
//! roster snapshot from the directory port, hand it to a query, return the
//! derived view. No business rules live here.

use std::collections::BTreeMap;

use tracing::{debug, instrument};

use crate::{
    application::ports::EmployeeDirectory,
    domain::{Employee, SalaryBracket, pipeline},
    error::ZookeepResult,
};

/// Service for roster queries.
pub struct PayrollService {
    directory: Box<dyn EmployeeDirectory>,
}

impl PayrollService {
    /// Create a new payroll service over the given directory adapter.
    pub fn new(directory: Box<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// The roster as stored, in insertion order.
    pub fn roster(&self) -> ZookeepResult<Vec<Employee>> {
        self.directory.all()
    }

    /// Everyone's salary, in roster order.
    pub fn salaries(&self) -> ZookeepResult<Vec<u32>> {
        Ok(pipeline::salaries_of(&self.directory.all()?))
    }

    /// The roster in ascending salary order (stable on ties).
    #[instrument(skip_all)]
    pub fn sorted_by_salary(&self) -> ZookeepResult<Vec<Employee>> {
        let roster = self.directory.all()?;
        debug!(count = roster.len(), "sorting roster by salary");
        Ok(pipeline::sort_by_salary(&roster))
    }

    /// The roster partitioned by salary bracket.
    ///
    /// Brackets with no members are absent from the map.
    #[instrument(skip_all)]
    pub fn grouped_by_bracket(&self) -> ZookeepResult<BTreeMap<SalaryBracket, Vec<Employee>>> {
        Ok(pipeline::group_by_salary_bracket(&self.directory.all()?))
    }

    /// Everyone in a single bracket, in roster order.
    pub fn in_bracket(&self, bracket: SalaryBracket) -> ZookeepResult<Vec<Employee>> {
        Ok(self
            .grouped_by_bracket()?
            .remove(&bracket)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ZookeepError;

    mockall::mock! {
        Directory {}

        impl EmployeeDirectory for Directory {
            fn all(&self) -> ZookeepResult<Vec<Employee>>;
            fn insert(&self, employee: Employee) -> ZookeepResult<()>;
            fn clear(&self) -> ZookeepResult<()>;
        }
    }

    fn roster() -> Vec<Employee> {
        vec![
            Employee::new("John", 50_000),
            Employee::new("Jane", 60_000),
            Employee::new("Jake", 75_000),
            Employee::new("Emily", 90_000),
            Employee::new("Mike", 120_000),
        ]
    }

    fn service_with_roster() -> PayrollService {
        let mut directory = MockDirectory::new();
        directory.expect_all().returning(|| Ok(roster()));
        PayrollService::new(Box::new(directory))
    }

    #[test]
    fn salaries_project_in_roster_order() {
        let salaries = service_with_roster().salaries().unwrap();
        assert_eq!(salaries, vec![50_000, 60_000, 75_000, 90_000, 120_000]);
    }

    #[test]
    fn sorted_by_salary_ascends() {
        let sorted = service_with_roster().sorted_by_salary().unwrap();
        assert_eq!(sorted.first().unwrap().name(), "John");
        assert_eq!(sorted.last().unwrap().name(), "Mike");
    }

    #[test]
    fn grouped_by_bracket_has_no_empty_buckets() {
        let groups = service_with_roster().grouped_by_bracket().unwrap();
        assert_eq!(groups.len(), 3);
        assert!(groups.values().all(|members| !members.is_empty()));
    }

    #[test]
    fn in_bracket_returns_members_in_roster_order() {
        let middle = service_with_roster()
            .in_bracket(SalaryBracket::Middle)
            .unwrap();
        let names: Vec<&str> = middle.iter().map(Employee::name).collect();
        assert_eq!(names, vec!["Jane", "Jake", "Emily"]);
    }

    #[test]
    fn in_bracket_of_absent_bracket_is_empty() {
        let mut directory = MockDirectory::new();
        directory
            .expect_all()
            .returning(|| Ok(vec![Employee::new("John", 50_000)]));
        let service = PayrollService::new(Box::new(directory));

        assert!(service.in_bracket(SalaryBracket::Upper).unwrap().is_empty());
    }

    #[test]
    fn directory_errors_propagate() {
        let mut directory = MockDirectory::new();
        directory.expect_all().returning(|| {
            Err(ZookeepError::Internal {
                message: "directory offline".into(),
            })
        });
        let service = PayrollService::new(Box::new(directory));

        assert!(service.sorted_by_salary().is_err());
    }
}

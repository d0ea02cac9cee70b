//! Pure query operations over roster data.
//!
//! Every function here is a deterministic `collection -> collection` view:
//! inputs are borrowed and never mutated, output order follows input order,
//! and calling an operation twice on the same input yields the same output.
//! The data itself is injected by the caller — this module owns no state.

use std::collections::BTreeMap;

use crate::domain::employee::{Employee, SalaryBracket};

/// Case-sensitive prefix filter over names, order-preserving.
pub fn names_starting_with(names: &[String], prefix: &str) -> Vec<String> {
    names
        .iter()
        .filter(|name| name.starts_with(prefix))
        .cloned()
        .collect()
}

/// Strict `>` filter, order-preserving.
pub fn numbers_greater_than(numbers: &[i32], threshold: i32) -> Vec<i32> {
    numbers
        .iter()
        .copied()
        .filter(|number| *number > threshold)
        .collect()
}

/// Element-wise upper-casing; length- and order-preserving.
pub fn uppercase(names: &[String]) -> Vec<String> {
    names.iter().map(|name| name.to_uppercase()).collect()
}

/// Element-wise name length in characters, not bytes; length- and
/// order-preserving.
pub fn length_of(names: &[String]) -> Vec<usize> {
    names.iter().map(|name| name.chars().count()).collect()
}

/// Projection to the salary field, order-preserving.
pub fn salaries_of(employees: &[Employee]) -> Vec<u32> {
    employees.iter().map(Employee::salary).collect()
}

/// Ascending sort by salary.
///
/// `sort_by_key` is stable, so equal salaries keep their original relative
/// order.
pub fn sort_by_salary(employees: &[Employee]) -> Vec<Employee> {
    let mut sorted = employees.to_vec();
    sorted.sort_by_key(Employee::salary);
    sorted
}

/// Partition the roster into salary brackets.
///
/// Exactly one bracket per employee; within a bucket, roster order is kept.
/// A bracket with no members is absent from the map — callers must not
/// expect empty-but-present buckets.
pub fn group_by_salary_bracket(employees: &[Employee]) -> BTreeMap<SalaryBracket, Vec<Employee>> {
    employees.iter().fold(BTreeMap::new(), |mut groups, employee| {
        groups
            .entry(employee.bracket())
            .or_insert_with(Vec::new)
            .push(employee.clone());
        groups
    })
}

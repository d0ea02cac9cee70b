//! Staff payroll value types: `Employee` and `SalaryBracket`.
//!
//! # Design
//!
//! These are pure value types — equality-by-value, no identity, no
//! lifecycle. The roster is read-only reference data; derived views of it
//! live in `pipeline.rs`. This file's only job is the types, their string
//! representations, and the bracket classifier.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Employee ─────────────────────────────────────────────────────────────────

/// One staff record. Immutable in practice: constructed once, never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn salary(&self) -> u32 {
        self.salary
    }

    /// Which salary bracket this employee falls into.
    pub const fn bracket(&self) -> SalaryBracket {
        SalaryBracket::of(self.salary)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} Salary: {}", self.name, self.salary)
    }
}

// ── SalaryBracket ────────────────────────────────────────────────────────────

/// Salary band with half-open boundaries.
///
/// `Ord` follows ascending salary so grouped output is deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SalaryBracket {
    /// salary < 60,000
    Lower,
    /// 60,000 <= salary <= 100,000
    Middle,
    /// salary > 100,000
    Upper,
}

impl SalaryBracket {
    /// Classify a salary. Every salary lands in exactly one bracket.
    pub const fn of(salary: u32) -> Self {
        if salary < 60_000 {
            Self::Lower
        } else if salary <= 100_000 {
            Self::Middle
        } else {
            Self::Upper
        }
    }

    /// Display label, byte-for-byte what reports print.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "Below 60,000",
            Self::Middle => "60,000 - 100,000",
            Self::Upper => "Above 100,000",
        }
    }
}

impl fmt::Display for SalaryBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SalaryBracket {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" | "low" | "below" => Ok(Self::Lower),
            "middle" | "mid" => Ok(Self::Middle),
            "upper" | "above" | "high" => Ok(Self::Upper),
            other => Err(DomainError::UnknownBracket(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bracket_boundaries_are_half_open() {
        assert_eq!(SalaryBracket::of(59_999), SalaryBracket::Lower);
        assert_eq!(SalaryBracket::of(60_000), SalaryBracket::Middle);
        assert_eq!(SalaryBracket::of(100_000), SalaryBracket::Middle);
        assert_eq!(SalaryBracket::of(100_001), SalaryBracket::Upper);
        assert_eq!(SalaryBracket::of(0), SalaryBracket::Lower);
    }

    #[test]
    fn bracket_labels_are_exact() {
        assert_eq!(SalaryBracket::Lower.to_string(), "Below 60,000");
        assert_eq!(SalaryBracket::Middle.to_string(), "60,000 - 100,000");
        assert_eq!(SalaryBracket::Upper.to_string(), "Above 100,000");
    }

    #[test]
    fn bracket_order_is_ascending_salary() {
        assert!(SalaryBracket::Lower < SalaryBracket::Middle);
        assert!(SalaryBracket::Middle < SalaryBracket::Upper);
    }

    #[test]
    fn bracket_from_str_accepts_aliases() {
        assert_eq!("below".parse::<SalaryBracket>().unwrap(), SalaryBracket::Lower);
        assert_eq!("MID".parse::<SalaryBracket>().unwrap(), SalaryBracket::Middle);
        assert_eq!("high".parse::<SalaryBracket>().unwrap(), SalaryBracket::Upper);
        assert!("executive".parse::<SalaryBracket>().is_err());
    }

    #[test]
    fn employee_display_matches_report_format() {
        let john = Employee::new("John", 50_000);
        assert_eq!(john.to_string(), "Name: John Salary: 50000");
    }

    #[test]
    fn employee_bracket_delegates_to_classifier() {
        assert_eq!(Employee::new("Mike", 120_000).bracket(), SalaryBracket::Upper);
    }
}

use crate::domain::{employee::Employee, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// An employee record needs a non-blank name; salary is unconstrained.
    pub fn validate_employee(employee: &Employee) -> Result<(), DomainError> {
        if employee.name().trim().is_empty() {
            return Err(DomainError::InvalidEmployee(
                "name is null or empty".into(),
            ));
        }
        Ok(())
    }
}

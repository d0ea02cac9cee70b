//! In-memory employee directory with the built-in sample roster.

use std::sync::{Arc, RwLock};

use tracing::debug;

use zookeep_core::{
    application::ports::EmployeeDirectory,
    domain::{DomainValidator as validator, Employee},
    error::ZookeepResult,
};

use crate::sample;

/// Thread-safe in-memory employee directory.
#[derive(Clone, Default)]
pub struct InMemoryDirectory {
    inner: Arc<RwLock<Vec<Employee>>>,
}

impl InMemoryDirectory {
    /// Create a new empty directory.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a directory pre-loaded with the sample roster.
    pub fn with_sample() -> ZookeepResult<Self> {
        let directory = Self::new();
        for employee in sample::employees() {
            directory.insert(employee)?;
        }
        Ok(directory)
    }

    /// Get the number of records.
    pub fn len(&self) -> usize {
        self.inner.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Check if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn all(&self) -> ZookeepResult<Vec<Employee>> {
        let records = self
            .inner
            .read()
            .map_err(|_| zookeep_core::application::ApplicationError::DirectoryLockError)?;

        Ok(records.clone())
    }

    fn insert(&self, employee: Employee) -> ZookeepResult<()> {
        // Validate before insertion
        validator::validate_employee(&employee)
            .map_err(zookeep_core::error::ZookeepError::Domain)?;

        let mut records = self
            .inner
            .write()
            .map_err(|_| zookeep_core::application::ApplicationError::DirectoryLockError)?;

        debug!(name = %employee.name(), "inserting employee record");
        records.push(employee);
        Ok(())
    }

    fn clear(&self) -> ZookeepResult<()> {
        let mut records = self
            .inner
            .write()
            .map_err(|_| zookeep_core::application::ApplicationError::DirectoryLockError)?;
        records.clear();
        Ok(())
    }
}

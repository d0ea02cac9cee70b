//! In-memory recording reporter for testing.

use std::sync::{Arc, RwLock};

use zookeep_core::{application::ports::Reporter, error::ZookeepResult};

/// Recording reporter: keeps every reported line for later inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryReporter {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryReporter {
    /// Create a new empty memory reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines reported so far, in order (testing helper).
    pub fn lines(&self) -> Vec<String> {
        self.inner.read().map(|lines| lines.clone()).unwrap_or_default()
    }

    /// Number of lines reported so far.
    pub fn len(&self) -> usize {
        self.inner.read().map(|lines| lines.len()).unwrap_or(0)
    }

    /// Whether nothing has been reported yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything reported so far.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.inner.write() {
            lines.clear();
        }
    }
}

impl Reporter for MemoryReporter {
    fn report(&self, line: &str) -> ZookeepResult<()> {
        let mut lines = self
            .inner
            .write()
            .map_err(|_| zookeep_core::application::ApplicationError::ReportFailed {
                reason: "reporter lock poisoned".into(),
            })?;
        lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_in_order() {
        let reporter = MemoryReporter::new();
        reporter.report("first").unwrap();
        reporter.report("second").unwrap();
        assert_eq!(reporter.lines(), vec!["first", "second"]);
    }

    #[test]
    fn clear_forgets_everything() {
        let reporter = MemoryReporter::new();
        reporter.report("line").unwrap();
        reporter.clear();
        assert!(reporter.is_empty());
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let reporter = MemoryReporter::new();
        let alias = reporter.clone();
        reporter.report("shared").unwrap();
        assert_eq!(alias.lines(), vec!["shared"]);
    }
}

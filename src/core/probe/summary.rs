//! Ordered per-model results of one tester run.

use crate::core::models::ModelDescriptor;

use super::TestOutcome;

#[derive(Debug, Default)]
pub struct RunSummary {
    results: Vec<(ModelDescriptor, TestOutcome)>,
}

impl RunSummary {
    pub fn push(&mut self, descriptor: ModelDescriptor, outcome: TestOutcome) {
        self.results.push((descriptor, outcome));
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Descriptors whose probe succeeded, in run order.
    pub fn working(&self) -> Vec<&ModelDescriptor> {
        self.results
            .iter()
            .filter(|(_, o)| o.is_success())
            .map(|(d, _)| d)
            .collect()
    }

    /// Descriptors whose probe failed, in run order.
    pub fn failed(&self) -> Vec<&ModelDescriptor> {
        self.results
            .iter()
            .filter(|(_, o)| !o.is_success())
            .map(|(d, _)| d)
            .collect()
    }

    pub fn working_count(&self) -> usize {
        self.results.iter().filter(|(_, o)| o.is_success()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.total() - self.working_count()
    }
}

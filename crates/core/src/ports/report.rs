use crate::domain::{DivergenceResult, OverviewEntry};
use anyhow::Result;
use std::path::PathBuf;

/// Per-project block of the local report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectBlock {
    pub name: String,
    pub mount_path: PathBuf,
    pub revision: String,
    pub local_branches: Vec<String>,
}

impl ProjectBlock {
    pub fn branch_count(&self) -> usize {
        self.local_branches.len()
    }
}

/// Port for presenting report data
pub trait ReportRenderer {
    /// A heading followed by its value, e.g. `Manifest branch: main`
    fn field(&mut self, heading: &str, value: &str) -> Result<()>;

    fn project(&mut self, block: &ProjectBlock) -> Result<()>;

    fn divergence(&mut self, result: &DivergenceResult) -> Result<()>;

    /// Only called with a non-empty overview
    fn overview(&mut self, entries: &[OverviewEntry<'_>]) -> Result<()>;
}

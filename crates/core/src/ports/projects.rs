use crate::domain::Project;
use crate::error::Result;

/// Port for turning command-line project arguments into projects
pub trait ProjectSource {
    /// Resolve names or paths to projects, in argument order.
    /// An empty argument list means every known project.
    fn resolve(&self, args: &[String]) -> Result<Vec<Project>>;
}

//! Per-file extraction result

use super::{Dependency, Manager};
use serde::{Deserialize, Serialize};

/// Ordered sequence of dependency records extracted from one file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageFile {
    /// The manager that produced these records
    pub manager: Manager,
    /// Records in the order they were detected
    pub deps: Vec<Dependency>,
}

impl PackageFile {
    /// Creates an empty package file for a manager
    pub fn new(manager: Manager) -> Self {
        Self {
            manager,
            deps: Vec::new(),
        }
    }

    /// Creates a package file from already-collected records
    pub fn with_deps(manager: Manager, deps: Vec<Dependency>) -> Self {
        Self { manager, deps }
    }

    /// Returns true if no records were extracted
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Returns the number of extracted records
    pub fn len(&self) -> usize {
        self.deps.len()
    }
}

//! Manager identifiers for the extractor family

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extractors this crate provides, one per manifest-like file shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Manager {
    /// Module declaration files with free-form `source` references
    Modules,
    /// Gradle wrapper properties files (`distributionUrl` lines)
    GradleWrapper,
    /// Python build scripts (interpreter-probed sibling extractor)
    PythonSetup,
}

impl Manager {
    /// Returns the stable string id for this manager
    pub fn id(&self) -> &'static str {
        match self {
            Manager::Modules => "modules",
            Manager::GradleWrapper => "gradle-wrapper",
            Manager::PythonSetup => "python-setup",
        }
    }

    /// Returns the display name for this manager
    pub fn display_name(&self) -> &'static str {
        match self {
            Manager::Modules => "Modules",
            Manager::GradleWrapper => "Gradle Wrapper",
            Manager::PythonSetup => "Python Setup",
        }
    }

    /// Returns all managers
    pub fn all() -> &'static [Manager] {
        &[Manager::Modules, Manager::GradleWrapper, Manager::PythonSetup]
    }
}

impl fmt::Display for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

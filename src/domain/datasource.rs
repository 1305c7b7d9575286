//! Datasource and versioning-scheme identifiers
//!
//! Both enums are opaque routing tags: this crate never talks to the
//! backends they name, it only records which one applies to a dependency.

use serde::{Deserialize, Serialize};
use std::fmt;

/// External version-lookup backend that can resolve a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Datasource {
    /// GitHub tag listing for `github.com/<org>/<repo>` references
    GithubTags,
    /// Generic `git ls-remote` style tag listing for arbitrary git hosts
    GitTags,
    /// Module registry resolved from a `<host>/<namespace>/<name>` path
    ModuleRegistry,
    /// Gradle distribution version service (wrapper upgrades)
    GradleVersion,
}

impl Datasource {
    /// Returns the stable string id used in serialized records and logs
    pub fn id(&self) -> &'static str {
        match self {
            Datasource::GithubTags => "github-tags",
            Datasource::GitTags => "git-tags",
            Datasource::ModuleRegistry => "module-registry",
            Datasource::GradleVersion => "gradle-version",
        }
    }

    /// Returns all known datasources
    pub fn all() -> &'static [Datasource] {
        &[
            Datasource::GithubTags,
            Datasource::GitTags,
            Datasource::ModuleRegistry,
            Datasource::GradleVersion,
        ]
    }
}

impl fmt::Display for Datasource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Version-ordering scheme that applies to a dependency's version strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Versioning {
    /// Semantic versioning (the default when no scheme is recorded)
    Semver,
    /// Gradle's release/rc/milestone ordering
    Gradle,
}

impl Versioning {
    /// Returns the stable string id for this scheme
    pub fn id(&self) -> &'static str {
        match self {
            Versioning::Semver => "semver",
            Versioning::Gradle => "gradle",
        }
    }
}

impl fmt::Display for Versioning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datasource_ids() {
        assert_eq!(Datasource::GithubTags.id(), "github-tags");
        assert_eq!(Datasource::GitTags.id(), "git-tags");
        assert_eq!(Datasource::ModuleRegistry.id(), "module-registry");
        assert_eq!(Datasource::GradleVersion.id(), "gradle-version");
    }

    #[test]
    fn test_datasource_display() {
        assert_eq!(format!("{}", Datasource::GithubTags), "github-tags");
        assert_eq!(format!("{}", Datasource::ModuleRegistry), "module-registry");
    }

    #[test]
    fn test_datasource_all() {
        let all = Datasource::all();
        assert_eq!(all.len(), 4);
        assert!(all.contains(&Datasource::GithubTags));
        assert!(all.contains(&Datasource::GitTags));
        assert!(all.contains(&Datasource::ModuleRegistry));
        assert!(all.contains(&Datasource::GradleVersion));
    }

    #[test]
    fn test_versioning_ids() {
        assert_eq!(Versioning::Semver.id(), "semver");
        assert_eq!(Versioning::Gradle.id(), "gradle");
    }

    #[test]
    fn test_serde_datasource() {
        let json = serde_json::to_string(&Datasource::GithubTags).unwrap();
        assert_eq!(json, "\"github-tags\"");

        let parsed: Datasource = serde_json::from_str("\"git-tags\"").unwrap();
        assert_eq!(parsed, Datasource::GitTags);
    }

    #[test]
    fn test_serde_versioning() {
        let json = serde_json::to_string(&Versioning::Gradle).unwrap();
        assert_eq!(json, "\"gradle\"");

        let parsed: Versioning = serde_json::from_str("\"semver\"").unwrap();
        assert_eq!(parsed, Versioning::Semver);
    }
}

//! Dependency record structures
//!
//! A [`Dependency`] is the single result type of both the line scanner and
//! the reference classifier. Classification is total: every input produces
//! a record, and the record lands in exactly one terminal state
//! (classified, skip-tagged, or unclassified).

use super::{Datasource, Versioning};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provenance category assigned to a reference by classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyKind {
    /// `github.com/<org>/<repo>` URL pinned with a `?ref=` tag
    GithubTagRef,
    /// Tagged git URL on an arbitrary host (`http`/`https`/`ssh`)
    GenericGitTagRef,
    /// `<host>/<namespace>/<name>` registry module path
    RegistryModule,
    /// Relative filesystem path, never sent for resolution
    LocalPath,
    /// Version token embedded in a wrapper distribution URL
    WrapperDistribution,
    /// No provenance category matched
    #[default]
    Unclassified,
}

/// Reason why a reference is excluded from version resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The dependency declared no source at all
    NoSource,
    /// The source is a relative local path
    LocalPath,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoSource => write!(f, "no source"),
            SkipReason::LocalPath => write!(f, "local path"),
        }
    }
}

/// A dependency reference extracted from a manifest-like file
///
/// Constructed once per detected reference and returned by value; the
/// engine keeps no state across records. Optional fields are populated
/// according to the record's terminal state (see module doc).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Provenance category
    pub kind: DependencyKind,
    /// Canonical dependency identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Display-friendly short form of the name (may equal `name`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    /// Version/tag/ref currently pinned in source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    /// Which external backend can resolve versions for this dependency
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasource: Option<Datasource>,
    /// Which version-ordering scheme applies
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versioning: Option<Versioning>,
    /// Identifier handed to the datasource; falls back to `name` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lookup_name: Option<String>,
    /// Candidate registry base URLs, populated only for registry modules
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registry_urls: Vec<String>,
    /// Present only when the reference must not be sent for resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_reason: Option<SkipReason>,
    /// Original unparsed reference string, retained for diagnostics
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_raw: Option<String>,
}

impl Dependency {
    /// Creates a record for a dependency that declared no source
    pub fn no_source() -> Self {
        Self {
            skip_reason: Some(SkipReason::NoSource),
            ..Self::default()
        }
    }

    /// Creates a skip record for a relative local path
    pub fn local_path(source: impl Into<String>) -> Self {
        Self {
            kind: DependencyKind::LocalPath,
            skip_reason: Some(SkipReason::LocalPath),
            source_raw: Some(source.into()),
            ..Self::default()
        }
    }

    /// Creates a bare unclassified record for a source nothing matched
    pub fn unclassified(source: impl Into<String>) -> Self {
        Self {
            source_raw: Some(source.into()),
            ..Self::default()
        }
    }

    /// Returns true if the record carries a skip reason
    pub fn is_skipped(&self) -> bool {
        self.skip_reason.is_some()
    }

    /// Returns true if classification produced a resolvable record
    ///
    /// Classified records carry both a name and a datasource; skip-tagged
    /// and unclassified records carry neither.
    pub fn is_classified(&self) -> bool {
        self.name.is_some() && self.datasource.is_some() && !self.is_skipped()
    }

    /// Returns the identifier to hand to the datasource when resolving
    pub fn resolution_name(&self) -> Option<&str> {
        self.lookup_name.as_deref().or(self.name.as_deref())
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(reason) = &self.skip_reason {
            return write!(f, "skipped ({})", reason);
        }
        match (&self.name, &self.current_value) {
            (Some(name), Some(value)) => write!(f, "{}@{}", name, value),
            (Some(name), None) => write!(f, "{}", name),
            _ => write!(f, "unclassified"),
        }
    }
}

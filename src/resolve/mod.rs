//! Version resolution seam
//!
//! This module provides:
//! - The `VersionLookup` trait that real datasource backends implement
//!   (outside this crate; no network code lives here)
//! - `lookup_updates`, the dispatch glue between classified records and a
//!   backend, enforcing that skipped records are never resolved

mod release;

pub use release::{compare_versions, Release};

use crate::domain::{Datasource, Dependency};
use crate::error::LookupError;
use async_trait::async_trait;
use tracing::debug;

/// Trait for version lookup backends
#[async_trait]
pub trait VersionLookup: Send + Sync {
    /// Fetch the releases known for a lookup name, oldest first
    async fn releases(
        &self,
        datasource: Datasource,
        lookup_name: &str,
    ) -> Result<Vec<Release>, LookupError>;
}

/// Resolves the available releases for one dependency record.
///
/// Skip-tagged and unclassified records short-circuit to an empty list
/// without touching the backend. Classified records query with their
/// lookup name, falling back to the display name.
pub async fn lookup_updates(
    dep: &Dependency,
    lookup: &dyn VersionLookup,
) -> Result<Vec<Release>, LookupError> {
    if let Some(reason) = dep.skip_reason {
        debug!(%reason, "dependency skipped, nothing to resolve");
        return Ok(Vec::new());
    }

    let (Some(datasource), Some(name)) = (dep.datasource, dep.resolution_name()) else {
        debug!("dependency is unclassified, nothing to resolve");
        return Ok(Vec::new());
    };

    lookup.releases(datasource, name).await
}

//! Core domain models for depsource
//!
//! This module contains the fundamental types used throughout the crate:
//! - Dependency records and their provenance categories
//! - Datasource and versioning-scheme identifiers
//! - Manager identifiers for the extractor family
//! - Per-file extraction results

mod datasource;
mod dependency;
mod manager;
mod package_file;

pub use datasource::{Datasource, Versioning};
pub use dependency::{Dependency, DependencyKind, SkipReason};
pub use manager::Manager;
pub use package_file::PackageFile;

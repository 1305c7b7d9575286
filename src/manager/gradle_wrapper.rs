//! Wrapper properties scanner
//!
//! Handles:
//! - gradle-wrapper.properties style files
//! - The `distributionUrl=...-<version>-<bin|all>.zip` assignment line
//!
//! A properties file declares at most one distribution, so scanning stops
//! at the first matching line. No match is a valid outcome, not an error.

use crate::domain::{Datasource, Dependency, DependencyKind, Manager, PackageFile, Versioning};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Distribution assignment: distributionUrl=https\://host/path/gradle-6.2-bin.zip
static DISTRIBUTION_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<assignment>distributionUrl\s*=\s*)\S*-(?P<version>[\d.]+)-(?P<type>bin|all)\.zip\s*$")
        .unwrap()
});

/// Scans file content for a wrapper distribution declaration.
///
/// Returns the record for the first matching line, or `None` when no line
/// declares a distribution URL.
pub fn scan(content: &str) -> Option<Dependency> {
    content.lines().find_map(scan_line)
}

/// Wraps the scanned record in a per-file result.
pub fn extract_package_file(content: &str) -> Option<PackageFile> {
    let dep = scan(content)?;
    Some(PackageFile::with_deps(Manager::GradleWrapper, vec![dep]))
}

/// Tests one line against the distribution pattern
fn scan_line(line: &str) -> Option<Dependency> {
    let caps = DISTRIBUTION_URL.captures(line)?;
    let assignment = caps.name("assignment")?;
    let version = caps.name("version")?.as_str();

    // Everything after the assignment prefix is the URL itself
    let url = line[assignment.end()..].trim_end();
    debug!(version, "wrapper distribution found");

    Some(Dependency {
        kind: DependencyKind::WrapperDistribution,
        name: Some("gradle".to_string()),
        short_name: Some("gradle".to_string()),
        current_value: Some(version.to_string()),
        datasource: Some(Datasource::GradleVersion),
        versioning: Some(Versioning::Gradle),
        source_raw: Some(url.to_string()),
        ..Dependency::default()
    })
}

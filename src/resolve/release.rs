//! Release metadata returned by lookup backends
//!
//! A release is a version string plus an optional publication date; tag
//! based datasources often have no date to report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One version a lookup backend knows about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// The version string (e.g., "1.2.3" or "v1.2.3")
    pub version: String,
    /// When this version was published, if the backend reports it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released_at: Option<DateTime<Utc>>,
}

impl Release {
    /// Create a release without a publication date
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            released_at: None,
        }
    }

    /// Create a release with a publication date
    pub fn with_date(version: impl Into<String>, released_at: DateTime<Utc>) -> Self {
        Self {
            version: version.into(),
            released_at: Some(released_at),
        }
    }
}

impl Ord for Release {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        compare_versions(&self.version, &other.version)
    }
}

impl PartialOrd for Release {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two version strings by their numeric dotted parts
pub fn compare_versions(a: &str, b: &str) -> std::cmp::Ordering {
    let parse_parts = |s: &str| -> Vec<u64> {
        // Remove leading 'v' if present
        let s = s.strip_prefix('v').unwrap_or(s);
        // Split by . and - and take only the numeric parts
        s.split(['.', '-']).filter_map(|p| p.parse().ok()).collect()
    };

    let parts_a = parse_parts(a);
    let parts_b = parse_parts(b);

    for (pa, pb) in parts_a.iter().zip(parts_b.iter()) {
        match pa.cmp(pb) {
            std::cmp::Ordering::Equal => continue,
            other => return other,
        }
    }

    // All common parts equal; the longer version is greater
    parts_a.len().cmp(&parts_b.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_release_new() {
        let release = Release::new("1.2.3");
        assert_eq!(release.version, "1.2.3");
        assert_eq!(release.released_at, None);
    }

    #[test]
    fn test_release_with_date() {
        let date = Utc.with_ymd_and_hms(2020, 4, 15, 10, 0, 0).unwrap();
        let release = Release::with_date("1.2.3", date);
        assert_eq!(release.released_at, Some(date));
    }

    #[test]
    fn test_release_ordering() {
        assert!(Release::new("1.0.0") < Release::new("2.0.0"));
        assert!(Release::new("1.0.0") < Release::new("1.1.0"));
        assert!(Release::new("1.0.0") < Release::new("1.0.1"));
    }

    #[test]
    fn test_release_ordering_v_prefix() {
        assert!(Release::new("v1.0.0") < Release::new("v2.0.0"));
        assert_eq!(
            Release::new("1.0.0").cmp(&Release::new("v1.0.0")),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn test_release_ordering_multi_digit() {
        assert!(Release::new("1.9.0") < Release::new("1.10.0"));
        assert!(Release::new("10.0.0") > Release::new("9.0.0"));
    }

    #[test]
    fn test_release_ordering_different_lengths() {
        // Fewer parts sorts lower
        assert!(Release::new("1.0") < Release::new("1.0.0"));
    }

    #[test]
    fn test_release_sorting() {
        let mut releases = vec![
            Release::new("v2.0.0"),
            Release::new("1.0.0"),
            Release::new("1.5.0"),
            Release::new("1.0.1"),
        ];
        releases.sort();

        assert_eq!(releases[0].version, "1.0.0");
        assert_eq!(releases[1].version, "1.0.1");
        assert_eq!(releases[2].version, "1.5.0");
        assert_eq!(releases[3].version, "v2.0.0");
    }

    #[test]
    fn test_find_max_release() {
        let releases = vec![
            Release::new("1.0.0"),
            Release::new("2.5.0"),
            Release::new("2.0.0"),
        ];
        assert_eq!(releases.iter().max().unwrap().version, "2.5.0");
    }

    #[test]
    fn test_compare_versions_basic() {
        assert_eq!(
            compare_versions("1.0.0", "1.0.0"),
            std::cmp::Ordering::Equal
        );
        assert_eq!(compare_versions("1.0.0", "2.0.0"), std::cmp::Ordering::Less);
        assert_eq!(
            compare_versions("2.0.0", "1.0.0"),
            std::cmp::Ordering::Greater
        );
    }

    #[test]
    fn test_serde_release() {
        let date = Utc.with_ymd_and_hms(2020, 4, 15, 10, 0, 0).unwrap();
        let release = Release::with_date("1.2.3", date);

        let json = serde_json::to_string(&release).unwrap();
        let parsed: Release = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, release);
    }

    #[test]
    fn test_serde_release_skips_missing_date() {
        let json = serde_json::to_string(&Release::new("1.2.3")).unwrap();
        assert!(!json.contains("released_at"));
    }
}

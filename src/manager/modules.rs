//! Module source reference classifier
//!
//! Routes a free-form module source string to exactly one provenance
//! category:
//! - GitHub project pinned with a `?ref=` tag
//! - Tagged git URL on any host (optional `git::` prefix)
//! - Registry module path: `<host>/<namespace>/<name>`
//! - Local relative path (skipped)
//! - Missing source (skipped)
//!
//! Branches are tried in a fixed priority order and the first match is
//! committed. Classification is total: every input produces a record,
//! at worst an unclassified or skip-tagged one.

use crate::domain::{Datasource, Dependency, DependencyKind};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// GitHub project with a ref tag: [https://]github.com/<org>/<repo>?ref=<tag>
// Also covers the scp-style separator: git@github.com:<org>/<repo>?ref=<tag>
static GITHUB_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com[/:](?P<project>[^/]+/[a-z0-9.-]+).*\?ref=(?P<tag>.*)$").unwrap()
});

// Tagged git URL: [git::]<http|https|ssh>://[<user>@]<host>/<path>?ref=<tag>
static GIT_TAGS_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:git::)?(?P<url>(?:http|https|ssh)://(?:.*@)?(?P<path>.*/(?P<project>.*/.*)))\?ref=(?P<tag>.*)$",
    )
    .unwrap()
});

// Leading dotted hostname of a registry path: registry.example.com/ns/name
static HOSTNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<hostname>(\w+\.)+\w+)").unwrap());

/// Outcome of a single cascade branch, before conversion into a record
#[derive(Debug, Clone, PartialEq, Eq)]
enum SourceMatch {
    /// GitHub project with the trailing `.git` already stripped
    GithubRef { project: String, tag: String },
    /// Tagged git URL, subdirectory split already applied
    GitTagRef {
        name: String,
        short_name: String,
        lookup_name: String,
        tag: String,
    },
    /// Registry path; `registry_url` is present only when the leading
    /// hostname parsed
    RegistryModule {
        name: String,
        registry_url: Option<String>,
    },
    /// Relative local path, excluded from resolution
    LocalSkip,
    /// Nothing matched with enough confidence
    Unclassified,
}

/// Classifies a raw module source reference into a dependency record.
///
/// The cascade tries GitHub shorthand first, then generic tagged git URLs,
/// then plain registry/local paths. A missing or empty source yields a
/// record skipped for having no source. This function never fails: inputs
/// that fit no category come back unclassified.
pub fn classify(source: Option<&str>) -> Dependency {
    let Some(source) = source.filter(|s| !s.is_empty()) else {
        debug!("dependency has no source");
        return Dependency::no_source();
    };

    let matched = match_github_ref(source)
        .or_else(|| match_git_tag_ref(source))
        .unwrap_or_else(|| match_module_path(source));

    build_dependency(matched, source)
}

/// Matches GitHub shorthand sources pinned with a ref tag
fn match_github_ref(source: &str) -> Option<SourceMatch> {
    let caps = GITHUB_REF.captures(source)?;
    let project = caps.name("project")?.as_str();
    let tag = caps.name("tag")?.as_str();

    let project = project.strip_suffix(".git").unwrap_or(project);
    Some(SourceMatch::GithubRef {
        project: project.to_string(),
        tag: tag.to_string(),
    })
}

/// Matches tagged git URLs on arbitrary hosts
fn match_git_tag_ref(source: &str) -> Option<SourceMatch> {
    let caps = GIT_TAGS_REF.captures(source)?;
    let url = caps.name("url")?.as_str();
    let path = caps.name("path")?.as_str();
    let project = caps.name("project")?.as_str();
    let tag = caps.name("tag")?.as_str();

    let (name, short_name, lookup_name) = if path.contains("//") {
        debug!(source, "module source contains a subdirectory");
        let name = path.split("//").next().unwrap_or(path);
        let short_name = name.rsplit('/').next().unwrap_or(name);
        // Truncate the URL at the first post-scheme double slash
        let mut pieces = url.splitn(3, "//");
        let lookup_name = match (pieces.next(), pieces.next()) {
            (Some(scheme), Some(repo)) => format!("{}//{}", scheme, repo),
            _ => url.to_string(),
        };
        (name.to_string(), short_name.to_string(), lookup_name)
    } else {
        let name = path.strip_suffix(".git").unwrap_or(path);
        let short_name = project.strip_suffix(".git").unwrap_or(project);
        (name.to_string(), short_name.to_string(), url.to_string())
    };

    Some(SourceMatch::GitTagRef {
        name,
        short_name,
        lookup_name,
        tag: tag.to_string(),
    })
}

/// Classifies a plain path source: local skip, registry module, or
/// unclassified when there are too few segments to trust
fn match_module_path(source: &str) -> SourceMatch {
    let base = source.split("//").next().unwrap_or(source);
    let parts: Vec<&str> = base.split('/').collect();

    if parts.first() == Some(&"..") {
        return SourceMatch::LocalSkip;
    }

    if parts.len() >= 3 {
        let registry_url = HOSTNAME
            .captures(source)
            .and_then(|caps| caps.name("hostname"))
            .map(|m| format!("https://{}", m.as_str()));
        return SourceMatch::RegistryModule {
            name: parts.join("/"),
            registry_url,
        };
    }

    SourceMatch::Unclassified
}

/// Converts a branch outcome into the public dependency record
fn build_dependency(matched: SourceMatch, source: &str) -> Dependency {
    match matched {
        SourceMatch::GithubRef { project, tag } => Dependency {
            kind: DependencyKind::GithubTagRef,
            name: Some(format!("github.com/{}", project)),
            short_name: Some(project.clone()),
            current_value: Some(tag),
            datasource: Some(Datasource::GithubTags),
            lookup_name: Some(project),
            source_raw: Some(source.to_string()),
            ..Dependency::default()
        },
        SourceMatch::GitTagRef {
            name,
            short_name,
            lookup_name,
            tag,
        } => Dependency {
            kind: DependencyKind::GenericGitTagRef,
            name: Some(name),
            short_name: Some(short_name),
            current_value: Some(tag),
            datasource: Some(Datasource::GitTags),
            lookup_name: Some(lookup_name),
            source_raw: Some(source.to_string()),
            ..Dependency::default()
        },
        SourceMatch::RegistryModule { name, registry_url } => Dependency {
            kind: DependencyKind::RegistryModule,
            name: Some(name.clone()),
            short_name: Some(name),
            datasource: Some(Datasource::ModuleRegistry),
            registry_urls: registry_url.into_iter().collect(),
            source_raw: Some(source.to_string()),
            ..Dependency::default()
        },
        SourceMatch::LocalSkip => Dependency::local_path(source),
        SourceMatch::Unclassified => Dependency::unclassified(source),
    }
}

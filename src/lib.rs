//! depsource - Dependency source-reference extraction and classification
//!
//! This library locates dependency references in manifest-like file text
//! and classifies each one into a typed record ready for version lookup:
//! - Module source strings (GitHub refs, tagged git URLs, registry paths)
//! - Wrapper properties files (distribution URL lines)
//! - Interpreter probing for the build-script extractor family
//!
//! Classification is total: malformed input yields an unclassified or
//! skip-tagged record, never an error. Resolution and process execution
//! sit behind traits; no network or file-system access happens here.

pub mod domain;
pub mod error;
pub mod exec;
pub mod manager;
pub mod resolve;

//! Error types for the collaborator seams
//!
//! Extraction and classification are total and have no error channel: a
//! reference that cannot be classified is a first-class result, not a
//! failure. Errors exist only where this crate talks to injected
//! collaborators:
//! - ProbeError: external-process execution failures
//! - LookupError: version-lookup backend failures

use crate::domain::Datasource;
use thiserror::Error;

/// Errors surfaced by command-runner implementations
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The command could not be spawned
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The command ran but exited unsuccessfully
    #[error("command '{command}' failed: {message}")]
    Failed { command: String, message: String },
}

/// Errors surfaced by version-lookup implementations
#[derive(Error, Debug)]
pub enum LookupError {
    /// The datasource has no entry for the lookup name
    #[error("'{lookup_name}' not found in {datasource} datasource")]
    NotFound {
        datasource: Datasource,
        lookup_name: String,
    },

    /// The backend failed to answer
    #[error("lookup of '{lookup_name}' via {datasource} failed: {message}")]
    Backend {
        datasource: Datasource,
        lookup_name: String,
        message: String,
    },

    /// The backend answered with something unusable
    #[error("invalid response from {datasource} for '{lookup_name}': {message}")]
    InvalidResponse {
        datasource: Datasource,
        lookup_name: String,
        message: String,
    },
}

impl ProbeError {
    /// Creates a new Spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        ProbeError::Spawn {
            command: command.into(),
            source,
        }
    }

    /// Creates a new Failed error
    pub fn failed(command: impl Into<String>, message: impl Into<String>) -> Self {
        ProbeError::Failed {
            command: command.into(),
            message: message.into(),
        }
    }
}

impl LookupError {
    /// Creates a new NotFound error
    pub fn not_found(datasource: Datasource, lookup_name: impl Into<String>) -> Self {
        LookupError::NotFound {
            datasource,
            lookup_name: lookup_name.into(),
        }
    }

    /// Creates a new Backend error
    pub fn backend(
        datasource: Datasource,
        lookup_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::Backend {
            datasource,
            lookup_name: lookup_name.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        datasource: Datasource,
        lookup_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LookupError::InvalidResponse {
            datasource,
            lookup_name: lookup_name.into(),
            message: message.into(),
        }
    }
}

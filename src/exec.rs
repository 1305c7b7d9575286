//! External-process execution seam
//!
//! This module provides:
//! - The CommandRunner trait that collaborators implement
//! - A default implementation backed by tokio's process support
//!
//! The interpreter probe is the only consumer; it injects a runner so
//! tests can script command outcomes without touching the system.

use crate::error::ProbeError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Captured output of a finished command
///
/// Both streams are kept: version banners show up on stdout for some
/// interpreters and on stderr for others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Standard output, lossily decoded
    pub stdout: String,
    /// Standard error, lossily decoded
    pub stderr: String,
}

impl CommandOutput {
    /// Creates a command output from both streams
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }
}

/// Trait for running external commands
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a program with arguments and capture its output
    ///
    /// A non-zero exit status is an error: callers that tolerate failing
    /// commands (the probe loop does) handle it at the call site.
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProbeError>;
}

/// Default runner that executes real commands
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    /// Create a new system command runner
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for SystemCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ProbeError> {
        let command_str = if args.is_empty() {
            program.to_string()
        } else {
            format!("{} {}", program, args.join(" "))
        };

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| ProbeError::spawn(command_str.clone(), e))?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        if !output.status.success() {
            let message = if stderr.trim().is_empty() {
                format!("{}", output.status)
            } else {
                stderr.trim().to_string()
            };
            return Err(ProbeError::failed(command_str, message));
        }

        Ok(CommandOutput { stdout, stderr })
    }
}

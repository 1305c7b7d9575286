//! Interpreter version probe
//!
//! The build-script extractor shells out to a Python interpreter, and which
//! alias to use (`python`, `python3`, ...) depends on the host. The probe
//! runs `<candidate> --version` for each known alias, accepts the first one
//! at or above the minimum supported version, and memoizes the answer for
//! the lifetime of the probe instance.
//!
//! The memo is a `tokio::sync::OnceCell`, so concurrent first callers share
//! a single probe pass and all observe the same settled alias.

use crate::exec::{CommandRunner, SystemCommandRunner};
use regex::Regex;
use std::sync::LazyLock;
use tokio::sync::OnceCell;
use tracing::debug;

/// Interpreter aliases, tried in order
pub const INTERPRETER_CANDIDATES: [&str; 3] = ["python", "python3", "python3.8"];

/// Minimum interpreter version the extractor supports
const MIN_INTERPRETER: (u32, u32) = (3, 7);

// Version banner: "Python 3.8.0" (trailing suffixes like rc1 are ignored)
static VERSION_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Python (\d+)\.(\d+)").unwrap());

/// Extracts major and minor version numbers from an interpreter banner.
///
/// Returns `None` when the text does not look like a version banner.
pub fn parse_interpreter_version(banner: &str) -> Option<(u32, u32)> {
    let caps = VERSION_BANNER.captures(banner)?;
    let major = caps.get(1)?.as_str().parse().ok()?;
    let minor = caps.get(2)?.as_str().parse().ok()?;
    Some((major, minor))
}

/// Memoizing interpreter alias probe
pub struct InterpreterProbe {
    runner: Box<dyn CommandRunner>,
    alias: OnceCell<String>,
}

impl InterpreterProbe {
    /// Creates a probe with an injected command runner
    pub fn new(runner: Box<dyn CommandRunner>) -> Self {
        Self {
            runner,
            alias: OnceCell::new(),
        }
    }

    /// Creates a probe that runs real commands
    pub fn system() -> Self {
        Self::new(Box::new(SystemCommandRunner::new()))
    }

    /// Returns the interpreter alias to use, probing on first call.
    ///
    /// The probe loop runs at most once per instance; concurrent callers
    /// during the first call await the same pass and get the same value.
    pub async fn alias(&self) -> &str {
        self.alias.get_or_init(|| self.probe()).await
    }

    /// Clears the memoized alias so the next call probes again.
    ///
    /// Requires exclusive access, so shared handles cannot race a reset
    /// against an in-flight probe.
    pub fn reset(&mut self) {
        self.alias.take();
    }

    /// Runs the candidate loop once
    async fn probe(&self) -> String {
        for candidate in INTERPRETER_CANDIDATES {
            match self.runner.run(candidate, &["--version"]).await {
                Ok(output) => {
                    // Interpreters print the banner to either stream
                    let banner = if output.stdout.is_empty() {
                        &output.stderr
                    } else {
                        &output.stdout
                    };
                    if let Some(version) = parse_interpreter_version(banner) {
                        if version >= MIN_INTERPRETER {
                            debug!(candidate, "interpreter alias selected");
                            return candidate.to_string();
                        }
                    }
                }
                Err(err) => {
                    debug!(candidate, error = %err, "interpreter alias not found");
                }
            }
        }

        // No candidate qualified; fall back to the first one
        INTERPRETER_CANDIDATES[0].to_string()
    }
}

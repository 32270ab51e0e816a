//! Querying installed package managers for their version.

use crate::error::{PmError, Result};
use crate::manager::PackageManagerKind;
use semver::Version;
use std::process::{Command, Stdio};

/// Something that can ask a package manager binary for its version.
///
/// The system implementation spawns `<pm> --version`; tests substitute a
/// fixed table of installed managers.
pub trait VersionProbe {
    /// Run `<pm> --version` and return its standard output verbatim.
    ///
    /// Fails when the binary is missing, cannot be spawned, or exits
    /// unsuccessfully.
    fn query_version(&self, kind: PackageManagerKind) -> Result<String>;

    /// Availability check: the binary runs and reports a semantic version.
    ///
    /// Never fails; every error means "not available".
    fn available_version(&self, kind: PackageManagerKind) -> Option<Version> {
        match self.query_version(kind) {
            Ok(stdout) => {
                let version = parse_version(&stdout);
                if version.is_none() {
                    tracing::debug!(manager = %kind, output = %stdout.trim(), "Unparseable version output");
                }
                version
            }
            Err(e) => {
                tracing::debug!(manager = %kind, error = %e, "Package manager not available");
                None
            }
        }
    }
}

/// Parse `--version` output as a semantic version.
///
/// Surrounding whitespace and a single leading `v` are ignored.
pub fn parse_version(output: &str) -> Option<Version> {
    let trimmed = output.trim();
    let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(trimmed).ok()
}

/// Probe that spawns the real binaries found on `PATH`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl VersionProbe for SystemProbe {
    fn query_version(&self, kind: PackageManagerKind) -> Result<String> {
        let program = kind.binary();
        let path = which::which(program).map_err(|source| PmError::NotInstalled {
            program: program.to_string(),
            source,
        })?;

        let output = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .map_err(|source| PmError::Spawn {
                program: program.to_string(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PmError::VersionQuery {
                program: program.to_string(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

//! The resolved package manager for a project.

use crate::detect::{DetectContext, DetectOptions, Detector};
use crate::error::Result;
use crate::manager::PackageManagerKind;
use crate::probe::{SystemProbe, VersionProbe};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A detected package manager together with its reported version.
///
/// Built once by [`PackageManager::resolve`] and never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct PackageManager {
    #[serde(rename = "name")]
    kind: PackageManagerKind,
    version: String,
    /// Source that decided, `None` when the npm fallback was used
    source: Option<&'static str>,
    #[serde(skip)]
    cwd: PathBuf,
    #[serde(skip)]
    silent: bool,
}

impl PackageManager {
    /// Detect the package manager for `options` using the installed binaries.
    ///
    /// Detection itself always produces a manager. The final
    /// `<pm> --version` call is not guarded: if the chosen binary is
    /// missing, the error is returned.
    pub fn resolve(options: &DetectOptions) -> Result<Self> {
        let ctx = DetectContext::from_options(options)?;
        Self::resolve_with(&ctx, &Detector::new(), &SystemProbe)
    }

    /// Like [`resolve`](Self::resolve) with an explicit detector and probe.
    pub fn resolve_with(
        ctx: &DetectContext,
        detector: &Detector,
        probe: &dyn VersionProbe,
    ) -> Result<Self> {
        let detection = detector.detect(ctx, probe);
        let output = probe.query_version(detection.kind)?;
        let version = strip_final_newline(&output).to_string();

        tracing::info!(
            manager = %detection.kind,
            version = %version,
            source = detection.source.unwrap_or("fallback"),
            "Resolved package manager"
        );

        Ok(Self {
            kind: detection.kind,
            version,
            source: detection.source,
            cwd: ctx.cwd.clone(),
            silent: ctx.silent,
        })
    }

    pub fn kind(&self) -> PackageManagerKind {
        self.kind
    }

    /// Executable name (e.g., "pnpm").
    pub fn name(&self) -> &'static str {
        self.kind.binary()
    }

    /// Raw `--version` output without its trailing newline.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn source(&self) -> Option<&'static str> {
        self.source
    }

    /// Directory wrapper commands run in.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_silent(&self) -> bool {
        self.silent
    }
}

fn strip_final_newline(output: &str) -> &str {
    output
        .strip_suffix('\n')
        .map(|s| s.strip_suffix('\r').unwrap_or(s))
        .unwrap_or(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detect::testing::FakeProbe;
    use crate::error::PmError;
    use crate::manager::PackageManagerKind::*;
    use std::fs;
    use tempfile::TempDir;

    fn context(cwd: &Path) -> DetectContext {
        DetectContext::from_options(&DetectOptions::new().with_cwd(cwd).with_silent(true))
            .unwrap()
            .with_user_agent(None)
    }

    struct RawProbe(&'static str);

    impl VersionProbe for RawProbe {
        fn query_version(&self, _kind: PackageManagerKind) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_strip_final_newline() {
        assert_eq!(strip_final_newline("9.8.1\n"), "9.8.1");
        assert_eq!(strip_final_newline("9.8.1\r\n"), "9.8.1");
        assert_eq!(strip_final_newline("9.8.1"), "9.8.1");
        assert_eq!(strip_final_newline("9.8.1\n\n"), "9.8.1\n");
    }

    #[test]
    fn test_only_npm_installed() {
        let tmp = TempDir::new().unwrap();
        let probe = FakeProbe::with(&[(Npm, "9.8.1")]);

        let pm = PackageManager::resolve_with(&context(tmp.path()), &Detector::new(), &probe)
            .unwrap();

        assert_eq!(pm.kind(), Npm);
        assert_eq!(pm.name(), "npm");
        assert_eq!(pm.version(), "9.8.1");
        assert_eq!(pm.cwd(), tmp.path());
        assert!(pm.is_silent());
    }

    #[test]
    fn test_nothing_installed_fails_final_fetch() {
        let tmp = TempDir::new().unwrap();
        let probe = FakeProbe::none();

        let result = PackageManager::resolve_with(&context(tmp.path()), &Detector::new(), &probe);

        assert!(matches!(result, Err(PmError::Spawn { ref program, .. }) if program == "npm"));
        // the last call is the unguarded fetch of the fallback
        assert_eq!(probe.calls().last(), Some(&Npm));
    }

    #[test]
    fn test_lockfile_pick_not_installed_fails() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("yarn.lock"), "").unwrap();
        let probe = FakeProbe::with(&[(Pnpm, "8.6.0")]);

        let result = PackageManager::resolve_with(&context(tmp.path()), &Detector::new(), &probe);

        assert!(result.is_err());
        assert_eq!(probe.calls(), vec![Yarn]);
    }

    #[test]
    fn test_final_version_is_not_validated() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("pnpm-lock.yaml"), "").unwrap();

        let pm = PackageManager::resolve_with(
            &context(tmp.path()),
            &Detector::new(),
            &RawProbe("not-semver\n"),
        )
        .unwrap();

        assert_eq!(pm.kind(), Pnpm);
        assert_eq!(pm.version(), "not-semver");
        assert_eq!(pm.source(), Some("lockfile"));
    }

    #[test]
    fn test_serializes_name_and_version() {
        let tmp = TempDir::new().unwrap();
        let probe = FakeProbe::with(&[(Yarn, "1.22.19")]);

        let pm = PackageManager::resolve_with(&context(tmp.path()), &Detector::new(), &probe)
            .unwrap();
        let json = serde_json::to_value(&pm).unwrap();

        assert_eq!(json["name"], "yarn");
        assert_eq!(json["version"], "1.22.19");
        assert_eq!(json["source"], "prefer");
        assert!(json.get("cwd").is_none());
    }
}

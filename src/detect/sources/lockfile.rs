//! Detection from lockfiles.

use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;
use std::path::{Path, PathBuf};

/// Lockfile names and the manager that writes them. Order is priority.
pub const LOCKFILES: &[(&str, PackageManagerKind)] = &[
    ("package-lock.json", PackageManagerKind::Npm),
    ("yarn.lock", PackageManagerKind::Yarn),
    ("pnpm-lock.yaml", PackageManagerKind::Pnpm),
];

/// Trusts the lockfile present in the project.
///
/// Presence alone is enough; installation is not verified. With the
/// workspace flag each lockfile is also searched for in every ancestor
/// directory before the next lockfile is considered.
pub struct LockfileSource;

/// Find `name` as a file in `start` or the closest ancestor containing it.
pub fn find_up(start: &Path, name: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}

impl DetectionSource for LockfileSource {
    fn id(&self) -> &'static str {
        "lockfile"
    }

    fn detect(
        &self,
        ctx: &DetectContext,
        _probe: &dyn VersionProbe,
    ) -> Option<PackageManagerKind> {
        for (file, kind) in LOCKFILES {
            let direct = ctx.cwd.join(file);
            if direct.exists() {
                tracing::debug!(lockfile = %direct.display(), "Found lockfile");
                return Some(*kind);
            }

            if ctx.workspace {
                if let Some(found) = find_up(&ctx.cwd, file) {
                    tracing::debug!(lockfile = %found.display(), "Found workspace lockfile");
                    return Some(*kind);
                }
            }
        }

        None
    }
}

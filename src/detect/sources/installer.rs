//! Detection from the markers a package manager leaves in `node_modules`.

use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// Marker files inside `node_modules`. Order is priority.
pub const INSTALLER_MARKERS: &[(&str, PackageManagerKind)] = &[
    (".yarn-integrity", PackageManagerKind::Yarn),
    (".package-lock.json", PackageManagerKind::Npm),
    (".modules.yaml", PackageManagerKind::Pnpm),
    (".package_versions", PackageManagerKind::Cnpm),
];

/// Trusts whichever manager populated `node_modules`.
pub struct InstallerSource;

impl DetectionSource for InstallerSource {
    fn id(&self) -> &'static str {
        "installer"
    }

    fn detect(
        &self,
        ctx: &DetectContext,
        _probe: &dyn VersionProbe,
    ) -> Option<PackageManagerKind> {
        let node_modules = ctx.cwd.join("node_modules");

        INSTALLER_MARKERS
            .iter()
            .find(|(marker, _)| node_modules.join(marker).exists())
            .map(|(marker, kind)| {
                tracing::debug!(marker = %marker, manager = %kind, "Found installer marker");
                *kind
            })
    }
}

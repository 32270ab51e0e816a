//! Detection by scanning for installed managers.

use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// Scan order, biased away from npm.
pub const INSTALLED_SCAN_ORDER: &[PackageManagerKind] = &[
    PackageManagerKind::Yarn,
    PackageManagerKind::Pnpm,
    PackageManagerKind::Cnpm,
    PackageManagerKind::Npm,
];

/// Picks the first installed manager in a fixed order.
pub struct InstalledSource;

impl DetectionSource for InstalledSource {
    fn id(&self) -> &'static str {
        "installed"
    }

    fn detect(
        &self,
        _ctx: &DetectContext,
        probe: &dyn VersionProbe,
    ) -> Option<PackageManagerKind> {
        INSTALLED_SCAN_ORDER
            .iter()
            .copied()
            .find(|kind| probe.available_version(*kind).is_some())
    }
}

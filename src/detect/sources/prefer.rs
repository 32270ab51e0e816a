//! Detection from the caller's preference list.

use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// Preference order used when the caller supplies none.
pub const DEFAULT_PREFER: &[PackageManagerKind] = &[
    PackageManagerKind::Npm,
    PackageManagerKind::Yarn,
    PackageManagerKind::Pnpm,
    PackageManagerKind::Cnpm,
];

/// Picks the first preferred manager that is installed.
///
/// An explicitly empty preference list yields nothing.
pub struct PreferSource;

impl DetectionSource for PreferSource {
    fn id(&self) -> &'static str {
        "prefer"
    }

    fn detect(
        &self,
        ctx: &DetectContext,
        probe: &dyn VersionProbe,
    ) -> Option<PackageManagerKind> {
        ctx.prefer
            .as_deref()
            .unwrap_or(DEFAULT_PREFER)
            .iter()
            .copied()
            .find(|kind| probe.available_version(*kind).is_some())
    }
}

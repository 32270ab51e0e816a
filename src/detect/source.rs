//! Core trait for detection sources.

use crate::detect::DetectContext;
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// One independent signal about which package manager is in effect.
///
/// Sources never fail: a source that cannot decide returns `None` and the
/// detector moves on to the next one.
pub trait DetectionSource {
    /// Short identifier used in logs (e.g., "lockfile").
    fn id(&self) -> &'static str;

    /// Inspect the context and propose a package manager.
    ///
    /// Sources that need to confirm installation go through `probe`;
    /// sources that trust file presence never touch it.
    fn detect(&self, ctx: &DetectContext, probe: &dyn VersionProbe)
        -> Option<PackageManagerKind>;
}

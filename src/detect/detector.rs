//! Runs detection sources in priority order.

use crate::detect::sources::all_sources;
use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// Manager used when no source produces a result. Not verified.
pub const FALLBACK: PackageManagerKind = PackageManagerKind::Npm;

/// Outcome of detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub kind: PackageManagerKind,
    /// Id of the source that decided, `None` for the npm fallback.
    pub source: Option<&'static str>,
}

/// Consults sources in order and stops at the first one that answers.
pub struct Detector {
    sources: Vec<Box<dyn DetectionSource>>,
}

impl Detector {
    /// Detector with the built-in sources.
    pub fn new() -> Self {
        Self {
            sources: all_sources(),
        }
    }

    /// Detector with a custom ordered list of sources.
    pub fn with_sources(sources: Vec<Box<dyn DetectionSource>>) -> Self {
        Self { sources }
    }

    /// Source ids in the order they are consulted.
    pub fn ids(&self) -> Vec<&'static str> {
        self.sources.iter().map(|s| s.id()).collect()
    }

    /// Never fails: falls back to npm when no source answers.
    pub fn detect(&self, ctx: &DetectContext, probe: &dyn VersionProbe) -> Detection {
        for source in &self.sources {
            if let Some(kind) = source.detect(ctx, probe) {
                tracing::debug!(source = source.id(), manager = %kind, "Source matched");
                return Detection {
                    kind,
                    source: Some(source.id()),
                };
            }
            tracing::debug!(source = source.id(), "Source had no answer");
        }

        tracing::debug!(manager = %FALLBACK, "No source matched, using fallback");
        Detection {
            kind: FALLBACK,
            source: None,
        }
    }
}

impl Default for Detector {
    fn default() -> Self {
        Self::new()
    }
}

//! Package manager detection.
//!
//! This module provides:
//! - The detection context built from caller options
//! - The five signal sources, consulted in priority order
//! - The detector that runs them with early exit

mod context;
mod detector;
mod source;
pub mod sources;

pub use context::{DetectContext, DetectOptions, USER_AGENT_ENV};
pub use detector::{Detection, Detector};
pub use source::DetectionSource;
pub use sources::all_sources;

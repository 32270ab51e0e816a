//! Built-in detection sources, in priority order.

mod installed;
mod installer;
mod lockfile;
mod prefer;
mod user_agent;

pub use installed::{InstalledSource, INSTALLED_SCAN_ORDER};
pub use installer::{InstallerSource, INSTALLER_MARKERS};
pub use lockfile::{find_up, LockfileSource, LOCKFILES};
pub use prefer::{PreferSource, DEFAULT_PREFER};
pub use user_agent::{user_agent_name, UserAgentSource};

use crate::detect::DetectionSource;

/// Returns all built-in sources. Order is priority.
pub fn all_sources() -> Vec<Box<dyn DetectionSource>> {
    vec![
        Box::new(UserAgentSource),
        Box::new(LockfileSource),
        Box::new(InstallerSource),
        Box::new(PreferSource),
        Box::new(InstalledSource),
    ]
}

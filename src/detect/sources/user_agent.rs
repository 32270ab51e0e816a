//! Detection from the user agent of the launching package manager.

use crate::detect::{DetectContext, DetectionSource};
use crate::manager::PackageManagerKind;
use crate::probe::VersionProbe;

/// Trusts whichever package manager launched this process.
///
/// The name is taken from `npm_config_user_agent` and only accepted if
/// the binary is actually available.
pub struct UserAgentSource;

/// Extract the name segment of a user agent string (before the first `/`).
pub fn user_agent_name(user_agent: &str) -> Option<&str> {
    user_agent.split('/').next().filter(|name| !name.is_empty())
}

impl DetectionSource for UserAgentSource {
    fn id(&self) -> &'static str {
        "user-agent"
    }

    fn detect(
        &self,
        ctx: &DetectContext,
        probe: &dyn VersionProbe,
    ) -> Option<PackageManagerKind> {
        let name = user_agent_name(ctx.user_agent.as_deref()?)?;

        let kind = match name.parse::<PackageManagerKind>() {
            Ok(kind) => kind,
            Err(e) => {
                tracing::debug!(error = %e, "Ignoring user agent");
                return None;
            }
        };

        probe.available_version(kind).map(|_| kind)
    }
}

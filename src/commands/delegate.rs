//! Delegates wrapper subcommands to the resolved package manager

use crate::error::Result;
use crate::package_manager::PackageManager;
use crate::runner::Operation;

/// Run one operation through the package manager and wait for it.
pub async fn run(pm: &PackageManager, operation: Operation) -> Result<()> {
    tracing::debug!(manager = pm.name(), ?operation, "Delegating");
    pm.perform(&operation).await
}

//! Detect command implementation

use crate::error::Result;
use crate::package_manager::PackageManager;

/// Render the resolved manager as `<name> <version>` or JSON.
pub fn render(pm: &PackageManager, json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(pm)?)
    } else {
        Ok(format!("{} {}", pm.name(), pm.version()))
    }
}

/// Print the resolved package manager
pub fn run(pm: &PackageManager, json: bool) -> Result<()> {
    println!("{}", render(pm, json)?);
    Ok(())
}

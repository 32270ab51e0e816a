//! pmdetect - Detect the Node.js package manager in effect for a project
//!
//! This crate provides functionality for:
//! - Detecting npm, yarn, pnpm or cnpm from the environment, lockfiles,
//!   `node_modules` markers, preferences and installed binaries
//! - Running install/add/remove/upgrade/run/exec through the detected manager

pub mod cli;
pub mod commands;
pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod manager;
pub mod package_manager;
pub mod probe;
pub mod runner;

// Re-export commonly used types
pub use config::Config;
pub use detect::DetectOptions;
pub use error::{PmError, Result};
pub use manager::PackageManagerKind;
pub use package_manager::PackageManager;
pub use runner::Operation;

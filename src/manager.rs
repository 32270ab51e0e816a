//! The closed set of Node.js package managers this crate knows about.

use crate::error::PmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Node.js package manager.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PackageManagerKind {
    Npm,
    Yarn,
    Pnpm,
    Cnpm,
}

impl PackageManagerKind {
    /// Every known package manager.
    pub const ALL: [PackageManagerKind; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Cnpm];

    /// Executable name, which is also the canonical display name.
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Yarn => "yarn",
            Self::Pnpm => "pnpm",
            Self::Cnpm => "cnpm",
        }
    }

    /// Launcher used for one-off package binaries, as program plus
    /// leading arguments.
    ///
    /// Managers without a dedicated launcher go through `npx`.
    pub fn exec_launcher(&self) -> (&'static str, &'static [&'static str]) {
        match self {
            Self::Npm => ("npx", &[]),
            Self::Pnpm => ("pnpx", &[]),
            Self::Yarn => ("yarn", &["exec"]),
            Self::Cnpm => ("npx", &[]),
        }
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

impl FromStr for PackageManagerKind {
    type Err = PmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.binary() == s)
            .ok_or_else(|| PmError::UnknownManager(s.to_string()))
    }
}

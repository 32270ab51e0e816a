use crate::error::{PmError, Result};
use crate::manager::PackageManagerKind;
use std::path::{Component, Path, PathBuf};

/// Environment variable package managers set for the processes they launch.
///
/// Format: `<name>/<version> node/<node-version> <platform> <arch>`.
pub const USER_AGENT_ENV: &str = "npm_config_user_agent";

/// Caller preferences for detection. Every field is optional.
#[derive(Debug, Clone, Default)]
pub struct DetectOptions {
    /// Ordered preference list (None = npm, yarn, pnpm, cnpm)
    pub prefer: Option<Vec<PackageManagerKind>>,

    /// Also search parent directories for lockfiles
    pub workspace: bool,

    /// Project directory (None = current directory)
    pub cwd: Option<PathBuf>,

    /// Discard child process output in wrapper commands
    pub silent: bool,
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefer(mut self, prefer: Vec<PackageManagerKind>) -> Self {
        self.prefer = Some(prefer);
        self
    }

    pub fn with_workspace(mut self, workspace: bool) -> Self {
        self.workspace = workspace;
        self
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

/// Fully resolved input to detection.
///
/// `cwd` is always absolute and free of `.` and `..` components, so its
/// ancestors are the real parent directories.
#[derive(Debug, Clone)]
pub struct DetectContext {
    pub cwd: PathBuf,
    pub prefer: Option<Vec<PackageManagerKind>>,
    pub workspace: bool,
    pub silent: bool,
    /// Raw `npm_config_user_agent` value, captured once
    pub user_agent: Option<String>,
}

impl DetectContext {
    /// Build a context from options and the process environment.
    pub fn from_options(options: &DetectOptions) -> Result<Self> {
        let current_dir = || {
            std::env::current_dir().map_err(|source| PmError::Io {
                path: PathBuf::from("."),
                source,
            })
        };

        let cwd = match &options.cwd {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => current_dir()?.join(path),
            None => current_dir()?,
        };

        Ok(Self {
            cwd: normalize(&cwd),
            prefer: options.prefer.clone(),
            workspace: options.workspace,
            silent: options.silent,
            user_agent: std::env::var(USER_AGENT_ENV).ok(),
        })
    }

    /// Replace the captured user agent.
    pub fn with_user_agent(mut self, user_agent: Option<String>) -> Self {
        self.user_agent = user_agent;
        self
    }
}

/// Fold `.` and `..` lexically, without touching the filesystem.
///
/// `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

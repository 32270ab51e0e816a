//! Running package manager commands.

use crate::error::{PmError, Result};
use crate::package_manager::PackageManager;
use std::fmt;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;

/// A high-level package manager operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Run a package.json script
    Run(String),
    /// Install all dependencies
    Install,
    Add(Vec<String>),
    Remove(Vec<String>),
    Upgrade(Vec<String>),
    /// Run a package binary through the manager's launcher
    Exec { cmd: String, args: Vec<String> },
}

/// Concrete program and arguments for an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: &'static str,
    pub args: Vec<String>,
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

impl Invocation {
    /// Run the program in `cwd` and wait for it to exit.
    pub async fn spawn(&self, cwd: &Path, silent: bool) -> Result<()> {
        let program = which::which(self.program).map_err(|source| PmError::NotInstalled {
            program: self.program.to_string(),
            source,
        })?;

        let mut cmd = Command::new(program);
        cmd.args(&self.args).current_dir(cwd).kill_on_drop(true);

        if silent {
            cmd.stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
        } else {
            cmd.stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit());
        }

        tracing::info!(command = %self, cwd = %cwd.display(), "Running");

        let status = cmd.status().await.map_err(|source| PmError::Spawn {
            program: self.program.to_string(),
            source,
        })?;

        if !status.success() {
            return Err(PmError::CommandFailed {
                command: self.to_string(),
                code: status.code(),
            });
        }

        Ok(())
    }
}

impl PackageManager {
    /// Map an operation onto this manager's command line.
    pub fn invocation(&self, operation: &Operation) -> Invocation {
        let with = |subcommand: &str, rest: &[String]| Invocation {
            program: self.name(),
            args: std::iter::once(subcommand.to_string())
                .chain(rest.iter().cloned())
                .collect(),
        };

        match operation {
            Operation::Run(script) => with("run", std::slice::from_ref(script)),
            Operation::Install => with("install", &[]),
            Operation::Add(deps) => with("add", deps.as_slice()),
            Operation::Remove(deps) => with("remove", deps.as_slice()),
            Operation::Upgrade(deps) => with("upgrade", deps.as_slice()),
            Operation::Exec { cmd, args } => {
                let (program, leading) = self.kind().exec_launcher();
                Invocation {
                    program,
                    args: leading
                        .iter()
                        .map(|s| s.to_string())
                        .chain(std::iter::once(cmd.clone()))
                        .chain(args.iter().cloned())
                        .collect(),
                }
            }
        }
    }

    /// Spawn the operation and wait for it.
    ///
    /// Output goes to the terminal unless the manager was resolved in
    /// silent mode. A non-zero exit is an error.
    pub async fn perform(&self, operation: &Operation) -> Result<()> {
        self.invocation(operation)
            .spawn(self.cwd(), self.is_silent())
            .await
    }

    /// `<pm> run <script>`
    pub async fn run(&self, script: &str) -> Result<()> {
        self.perform(&Operation::Run(script.to_string())).await
    }

    /// `<pm> install`
    pub async fn install(&self) -> Result<()> {
        self.perform(&Operation::Install).await
    }

    /// `<pm> add <deps...>`
    pub async fn add(&self, deps: &[String]) -> Result<()> {
        self.perform(&Operation::Add(deps.to_vec())).await
    }

    /// `<pm> remove <deps...>`
    pub async fn remove(&self, deps: &[String]) -> Result<()> {
        self.perform(&Operation::Remove(deps.to_vec())).await
    }

    /// `<pm> upgrade <deps...>`
    pub async fn upgrade(&self, deps: &[String]) -> Result<()> {
        self.perform(&Operation::Upgrade(deps.to_vec())).await
    }

    /// `<launcher> <cmd> <args...>`, e.g. `npx`, `pnpx` or `yarn exec`.
    pub async fn exec(&self, cmd: &str, args: &[String]) -> Result<()> {
        self.perform(&Operation::Exec {
            cmd: cmd.to_string(),
            args: args.to_vec(),
        })
        .await
    }
}

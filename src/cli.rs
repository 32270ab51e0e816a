use crate::detect::DetectOptions;
use crate::manager::PackageManagerKind;
use crate::runner::Operation;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// pmdetect - Detect the Node.js package manager in effect for a project
#[derive(Parser, Debug)]
#[command(name = "pmdetect")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH", env = "PMDETECT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Preferred package managers, in order (comma-separated)
    #[arg(
        long,
        global = true,
        value_enum,
        value_delimiter = ',',
        value_name = "NAMES"
    )]
    pub prefer: Option<Vec<PackageManagerKind>>,

    /// Also look for lockfiles in parent directories
    #[arg(long, global = true)]
    pub workspace: bool,

    /// Project directory (defaults to the current directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub cwd: Option<PathBuf>,

    /// Hide output of the package manager commands
    #[arg(long, global = true)]
    pub silent: bool,

    /// Print the detected package manager as JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a package.json script
    Run(RunArgs),

    /// Install all dependencies
    Install,

    /// Add dependencies
    Add(DepsArgs),

    /// Remove dependencies
    Remove(DepsArgs),

    /// Upgrade dependencies (all when none are given)
    Upgrade(UpgradeArgs),

    /// Execute a package binary (npx, pnpx or yarn exec)
    Exec(ExecArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Script name
    pub script: String,
}

#[derive(Args, Debug)]
pub struct DepsArgs {
    /// Package names
    #[arg(required = true)]
    pub deps: Vec<String>,
}

#[derive(Args, Debug)]
pub struct UpgradeArgs {
    /// Package names
    pub deps: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ExecArgs {
    /// Binary to execute
    pub cmd: String,

    /// Arguments passed to the binary
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl Cli {
    /// Layer command-line flags over options coming from the config file.
    pub fn detect_options(&self, base: DetectOptions) -> DetectOptions {
        DetectOptions {
            prefer: self.prefer.clone().or(base.prefer),
            workspace: self.workspace || base.workspace,
            cwd: self.cwd.clone().or(base.cwd),
            silent: self.silent || base.silent,
        }
    }
}

impl Command {
    /// Wrapper operation for this subcommand, if it is one.
    pub fn operation(self) -> Option<Operation> {
        match self {
            Command::Run(args) => Some(Operation::Run(args.script)),
            Command::Install => Some(Operation::Install),
            Command::Add(args) => Some(Operation::Add(args.deps)),
            Command::Remove(args) => Some(Operation::Remove(args.deps)),
            Command::Upgrade(args) => Some(Operation::Upgrade(args.deps)),
            Command::Exec(args) => Some(Operation::Exec {
                cmd: args.cmd,
                args: args.args,
            }),
            Command::Completions(_) => None,
        }
    }
}

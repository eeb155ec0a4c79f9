use clap::{Args, Parser, Subcommand};
use svcs_sdk::{DuplicatePolicy, RepoOptions};

#[derive(Parser)]
#[command(
    name = "svcs",
    about = "SVCS: a minimal local snapshot-based version control system",
    version,
    allow_external_subcommands = true,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Project root; tracked paths are relative to it
    #[arg(long, global = true, default_value = ".")]
    pub root: String,

    /// Name of the control directory under the project root
    #[arg(long, global = true, default_value = "vcs")]
    pub control_dir: String,

    /// Ignore `add` of an already-tracked path instead of tracking it twice
    #[arg(long, global = true)]
    pub no_duplicates: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the SVCS command list
    #[arg(short, long, global = true)]
    pub help: bool,
}

impl Cli {
    pub fn repo_options(&self) -> RepoOptions {
        let policy = if self.no_duplicates {
            DuplicatePolicy::Ignore
        } else {
            DuplicatePolicy::Allow
        };
        RepoOptions::default()
            .with_control_dir(&self.control_dir)
            .with_duplicate_policy(policy)
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Get and set a username
    Config(ConfigArgs),
    /// Add a file to the index
    Add(AddArgs),
    /// Show commit logs
    Log,
    /// Save changes
    Commit(CommitArgs),
    /// Restore a file
    Checkout(CheckoutArgs),
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

#[derive(Args)]
pub struct ConfigArgs {
    pub name: Option<String>,
}

#[derive(Args)]
pub struct AddArgs {
    pub path: Option<String>,
}

#[derive(Args)]
pub struct CommitArgs {
    pub message: Option<String>,
}

#[derive(Args)]
pub struct CheckoutArgs {
    pub hash: Option<String>,
}

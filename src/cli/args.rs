//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `check`: verify that every scanned translation usage has a registry
//!   entry
//! - `update`: fetch remote registry data and reconcile local `lang.json`
//!   files
//! - `init`: initialize a `.langctlrc.json` configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by the scanning commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project name (falls back to the config file)
    #[arg(short, long)]
    pub project: Option<String>,

    /// Project root directory
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Only scan files whose path contains one of these comma-separated
    /// substrings ("all" disables the filter)
    #[arg(long, default_value = "all")]
    pub filter: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UpdateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Remote registry service endpoint (overrides the config file)
    #[arg(long, env = "LANGCTL_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Overwrite local registries without confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that scanned translation usages are covered by lang.json files
    Check(CheckCommand),
    /// Fetch remote registry data and reconcile local lang.json files
    Update(UpdateCommand),
    /// Initialize a new .langctlrc.json configuration file
    Init,
}

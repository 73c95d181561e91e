//! Command dispatch.
//!
//! Per-item failures are handled inside the workflows; everything that
//! bubbles up here is fatal for the run and reported once by `main`.

use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{bail, Context, Result};
use clap::CommandFactory;

use super::args::{Arguments, Command, CommonArgs, UpdateCommand};
use super::ExitStatus;
use crate::config::{self, Config, CONFIG_FILE_NAME};
use crate::core::{check, reconcile, remote, walker};
use crate::prompt::StdinPrompt;
use crate::report::{ConsoleReporter, Reporter};

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let reporter = ConsoleReporter;

    match args.command {
        Some(Command::Check(cmd)) => run_check(cmd.common, &reporter),
        Some(Command::Update(cmd)) => run_update(cmd, &reporter),
        Some(Command::Init) => run_init(),
        None => {
            Arguments::command().print_help().ok();
            Ok(ExitStatus::Success)
        }
    }
}

fn load_nearest_config() -> Result<Config> {
    let cwd = env::current_dir().context("Failed to resolve working directory")?;
    config::load_config(&cwd)
}

fn discover(common: &CommonArgs, config: &Config) -> Result<(PathBuf, walker::Discovery)> {
    let project = common
        .project
        .clone()
        .or_else(|| config.project.clone());
    let Some(project) = project else {
        bail!(
            "Project name is required (pass --project or set it in {})",
            CONFIG_FILE_NAME
        );
    };

    let root = fs::canonicalize(&common.root)
        .with_context(|| format!("Failed to resolve root directory: {}", common.root.display()))?;

    let filter = walker::Filter::parse(&common.filter);
    let discovery = walker::discover_files_and_keys(&project, &root, &filter)?;

    if common.verbose {
        println!(
            "Discovered {} files and {} registry keys under {}",
            discovery.files.len(),
            discovery.keys.len(),
            root.display()
        );
    }

    Ok((root, discovery))
}

fn run_check(common: CommonArgs, reporter: &dyn Reporter) -> Result<ExitStatus> {
    let config = load_nearest_config()?;
    let (_, discovery) = discover(&common, &config)?;

    let issues = check::validate_coverage(&discovery.files, reporter);
    if issues.is_empty() {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}

fn run_update(cmd: UpdateCommand, reporter: &dyn Reporter) -> Result<ExitStatus> {
    let config = load_nearest_config()?;
    let (root, discovery) = discover(&cmd.common, &config)?;

    let endpoint = cmd.endpoint.or_else(|| config.endpoint.clone());
    let Some(endpoint) = endpoint else {
        bail!(
            "Remote endpoint is required (pass --endpoint, set LANGCTL_ENDPOINT, or set it in {})",
            CONFIG_FILE_NAME
        );
    };

    if discovery.keys.is_empty() {
        reporter.notice("No registry keys discovered; nothing to update");
        return Ok(ExitStatus::Success);
    }

    let remote_data = remote::fetch_updates(&endpoint, &discovery.keys)?;
    let mut prompt = StdinPrompt;
    let summary = reconcile::reconcile(&root, remote_data, cmd.force, reporter, &mut prompt)?;

    if cmd.common.verbose {
        println!(
            "Updated {} registries ({} unchanged, {} cancelled, {} skipped)",
            summary.written, summary.unchanged, summary.cancelled, summary.skipped
        );
    }

    Ok(ExitStatus::Success)
}

fn run_init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        bail!("{} already exists", CONFIG_FILE_NAME);
    }

    fs::write(config_path, config::default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    Ok(ExitStatus::Success)
}

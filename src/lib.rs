//! repoinfo application library
//!
//! Wires the core report logic to git, the filesystem and the terminal.
//! Exposed as a library for integration tests.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod render;

use anyhow::Result;
use crossterm::tty::IsTty;
use repoinfo_core::app::InfoService;
use std::io;
use tracing::info;

use crate::adapters::{discovery::WorkspaceProjects, git::GitCli, registry::Git2Registry};
use crate::cli::CliArgs;
use crate::config::Config;
use crate::render::TextRenderer;

/// Run one report invocation against the workspace described by `args`
pub fn run(args: &CliArgs) -> Result<()> {
    let config = Config::from_cli_and_file(args, args.config.clone())?;
    let root = config.workspace_root()?;

    let source = WorkspaceProjects::scan(&root, &config)?;
    info!(
        "Found {} projects in {}",
        source.projects().len(),
        root.display()
    );

    let vcs = GitCli::new();
    let registry = Git2Registry::new();

    let stdout = io::stdout();
    let color = config.ui.color && stdout.is_tty();
    let mut renderer = TextRenderer::new(stdout.lock(), color)
        .with_branch_width(config.ui.branch_column_width);

    InfoService::new(&vcs, &registry, &source)
        .with_remote(config.remote.clone())
        .execute(&config.manifest_info(), &args.info_options(), &mut renderer)?;

    Ok(())
}

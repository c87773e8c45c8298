use clap::Parser;
use repoinfo_core::app::InfoOptions;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "repoinfo")]
#[command(about = "Get info on the manifest branch, current branch or unmerged branches")]
pub struct CliArgs {
    /// Show full info, including local and remote commits
    #[arg(short, long)]
    pub all: bool,

    /// Show overview of all commits
    #[arg(short, long)]
    pub overview: bool,

    /// Consider only checked out branches
    #[arg(short = 'b', long)]
    pub current_branch: bool,

    /// Workspace directory to scan for projects (overrides config)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Project names or paths
    pub projects: Vec<String>,
}

impl CliArgs {
    pub fn info_options(&self) -> InfoOptions {
        InfoOptions {
            all: self.all,
            overview: self.overview,
            current_branch: self.current_branch,
            projects: self.projects.clone(),
        }
    }
}

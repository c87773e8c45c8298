use anyhow::{Context, Result};
use directories::ProjectDirs;
use repoinfo_core::app::{ManifestInfo, DEFAULT_REMOTE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::adapters::discovery::enclosing_checkout;
use crate::cli::CliArgs;

pub const DEFAULT_BRANCH_COLUMN_WIDTH: usize = 33;

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Config {
    pub version: u32,
    /// Workspace root; the current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    #[serde(default = "default_remote")]
    pub remote: String,
    #[serde(default)]
    pub manifest: ManifestConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Per-project overrides keyed by path relative to the workspace root
    #[serde(default)]
    pub projects: HashMap<String, ProjectConfig>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ManifestConfig {
    /// Revision every project follows unless overridden
    pub revision: String,
    pub merge: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct UiConfig {
    pub color: bool,
    pub branch_column_width: usize,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct ProjectConfig {
    pub revision: String,
}

fn default_remote() -> String {
    DEFAULT_REMOTE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            base_dir: None,
            remote: default_remote(),
            manifest: ManifestConfig::default(),
            ui: UiConfig::default(),
            projects: HashMap::new(),
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            revision: "main".to_string(),
            merge: "refs/heads/main".to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: true,
            branch_column_width: DEFAULT_BRANCH_COLUMN_WIDTH,
        }
    }
}

pub fn get_default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", "repoinfo")
        .context("Failed to determine project directories")?;

    let config_dir = proj_dirs.config_dir();
    Ok(config_dir.join("repoinfo.toml"))
}

impl Config {
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let path = match config_path {
            Some(p) => p,
            None => get_default_config_path()?,
        };

        if !path.exists() {
            let default_config = Config::default();
            // Create directory if it doesn't exist
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            default_config.save(&path)?;
            return Ok(default_config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let contents =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;

        fs::write(&path, contents).with_context(|| {
            format!("Failed to write config file: {}", path.as_ref().display())
        })?;

        Ok(())
    }

    pub fn from_cli_and_file(cli_args: &CliArgs, config_path: Option<PathBuf>) -> Result<Self> {
        let mut config = Self::load(config_path)?;

        // CLI args override config file
        if let Some(base_dir) = &cli_args.base_dir {
            config.base_dir = Some(base_dir.clone());
        }
        if cli_args.no_color {
            config.ui.color = false;
        }

        Ok(config)
    }

    /// Absolute workspace root, resolved against the current directory
    pub fn workspace_root(&self) -> Result<PathBuf> {
        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        self.workspace_root_from(&cwd)
    }

    /// Absolute workspace root as seen from `cwd`.
    ///
    /// Without a configured `base_dir`, a `cwd` inside a checkout resolves to
    /// that checkout's worktree; otherwise `cwd` itself is the root.
    pub fn workspace_root_from(&self, cwd: &Path) -> Result<PathBuf> {
        let root = match &self.base_dir {
            Some(dir) => dir.clone(),
            None => enclosing_checkout(cwd).unwrap_or_else(|| cwd.to_path_buf()),
        };

        root.canonicalize()
            .with_context(|| format!("Workspace directory not found: {}", root.display()))
    }

    /// Revision a project at `relpath` is expected to follow
    pub fn revision_for(&self, relpath: &str) -> String {
        self.projects
            .get(relpath)
            .map(|project| project.revision.clone())
            .unwrap_or_else(|| self.manifest.revision.clone())
    }

    pub fn manifest_info(&self) -> ManifestInfo {
        ManifestInfo {
            revision: self.manifest.revision.clone(),
            merge_branch: self.manifest.merge.clone(),
        }
    }
}

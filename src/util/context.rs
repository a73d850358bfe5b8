//! Global context for pydeploy operations.
//!
//! Provides centralized access to the merged configuration, the download
//! cache and output settings.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;

use crate::util::config::{self, Config};

/// Project directories for pydeploy
static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("com", "pydeploy", "pydeploy"));

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    cwd: PathBuf,

    /// Home directory for global pydeploy data (~/.pydeploy/)
    home: PathBuf,

    verbose: bool,
    color: bool,
    config: Config,
}

impl GlobalContext {
    /// Create a new GlobalContext, loading the global and project configs.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext rooted at a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let home = config::global_config_dir().unwrap_or_else(|| PathBuf::from(".pydeploy"));
        let config = config::load_config(
            config::global_config_path().as_deref(),
            &config::project_config_path(&cwd),
        );

        GlobalContext {
            cwd,
            home,
            verbose: false,
            color: true,
            config,
        }
    }

    /// Replace the loaded configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    pub fn set_color(&mut self, color: bool) {
        self.color = color;
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the pydeploy home directory (~/.pydeploy/).
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Get the directory that downloaded archives are cached in.
    pub fn cache_dir(&self) -> PathBuf {
        if let Some(ref dir) = self.config.net.cache_dir {
            return self.cwd.join(dir);
        }

        match PROJECT_DIRS.as_ref() {
            Some(dirs) => dirs.cache_dir().to_path_buf(),
            None => self.home.join("cache"),
        }
    }

    pub fn is_offline(&self) -> bool {
        self.config.net.offline
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn color(&self) -> bool {
        self.color
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

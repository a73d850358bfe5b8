//! Configuration file support.
//!
//! Two configuration file locations are read:
//! - Global: `~/.pydeploy/config.toml` - User-wide defaults
//! - Project: `.pydeploy/config.toml` - Overrides for one directory
//!
//! Project config takes precedence over global config and command line
//! arguments take precedence over both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// pydeploy configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sysroot: SysrootConfig,
    pub build: BuildConfig,
    pub net: NetConfig,
}

/// Settings shared by both tools that locate the sysroot and host tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SysrootConfig {
    /// Directory containing the `sysroot-<target>` directories
    pub sysroots_dir: Option<PathBuf>,

    /// Directories searched for source archives
    pub source_dirs: Vec<PathBuf>,

    /// Host Python interpreter
    pub python: Option<PathBuf>,

    /// Host qmake
    pub qmake: Option<PathBuf>,
}

/// Settings for `pydeploy-build`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Optimisation level used when freezing modules
    pub opt: Option<u8>,

    /// Number of `.qrc` files to generate
    pub resources: Option<usize>,

    /// Directory holding bootstrap scripts and launcher sources
    pub runtime_dir: Option<PathBuf>,
}

/// Network-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Never download archives
    pub offline: bool,

    /// Override the download cache directory
    pub cache_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if the file is missing or bad.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.sysroot.sysroots_dir.is_some() {
            self.sysroot.sysroots_dir = other.sysroot.sysroots_dir;
        }
        if !other.sysroot.source_dirs.is_empty() {
            self.sysroot.source_dirs = other.sysroot.source_dirs;
        }
        if other.sysroot.python.is_some() {
            self.sysroot.python = other.sysroot.python;
        }
        if other.sysroot.qmake.is_some() {
            self.sysroot.qmake = other.sysroot.qmake;
        }

        if other.build.opt.is_some() {
            self.build.opt = other.build.opt;
        }
        if other.build.resources.is_some() {
            self.build.resources = other.build.resources;
        }
        if other.build.runtime_dir.is_some() {
            self.build.runtime_dir = other.build.runtime_dir;
        }

        if other.net.offline {
            self.net.offline = true;
        }
        if other.net.cache_dir.is_some() {
            self.net.cache_dir = other.net.cache_dir;
        }
    }
}

/// Load merged configuration from global and project locations.
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global pydeploy directory (~/.pydeploy).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".pydeploy"))
}

/// Get the global config path (~/.pydeploy/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.pydeploy/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".pydeploy").join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.sysroot.sysroots_dir.is_none());
        assert!(config.build.opt.is_none());
        assert!(!config.net.offline);
    }

    #[test]
    fn test_config_load() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");

        std::fs::write(
            &config_path,
            r#"
[sysroot]
source_dirs = ["/opt/src", "/tmp/src"]
python = "/usr/bin/python3.7"

[build]
opt = 1
resources = 4

[net]
offline = true
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.sysroot.source_dirs.len(), 2);
        assert_eq!(
            config.sysroot.python,
            Some(PathBuf::from("/usr/bin/python3.7"))
        );
        assert_eq!(config.build.opt, Some(1));
        assert_eq!(config.build.resources, Some(4));
        assert!(config.net.offline);
    }

    #[test]
    fn test_load_config_precedence() {
        let tmp = TempDir::new().unwrap();
        let global_path = tmp.path().join("global.toml");
        let project_path = tmp.path().join("project.toml");

        std::fs::write(
            &global_path,
            "[sysroot]\nqmake = \"/usr/bin/qmake\"\n\n[build]\nopt = 2\n",
        )
        .unwrap();
        std::fs::write(&project_path, "[build]\nopt = 0\n").unwrap();

        let config = load_config(Some(&global_path), &project_path);

        assert_eq!(config.build.opt, Some(0));
        assert_eq!(config.sysroot.qmake, Some(PathBuf::from("/usr/bin/qmake")));
    }

    #[test]
    fn test_bad_config_falls_back_to_default() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[build\nopt = ").unwrap();

        let config = Config::load_or_default(&path);
        assert!(config.build.opt.is_none());
    }
}

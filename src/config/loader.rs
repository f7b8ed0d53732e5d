//! Configuration loader with tier-based merging.
//!
//! Loads configuration from multiple tiers and merges them field-by-field.

use super::merge::deep_merge_all;
use super::types::Config;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config file tier, lowest to highest priority.
///
/// Built-in defaults sit below every tier and environment variables above.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ConfigTier {
    /// Project-level config ($CWD/task-api/)
    Project,
    /// User-level config (~/.task-api/)
    User,
    /// File named by `--config` or `TASK_API_CONFIG_PATH`
    Explicit,
}

impl std::fmt::Display for ConfigTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigTier::Project => write!(f, "project"),
            ConfigTier::User => write!(f, "user"),
            ConfigTier::Explicit => write!(f, "explicit"),
        }
    }
}

/// Directories searched for `config.yaml`.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project-level config directory
    pub project_dir: Option<PathBuf>,
    /// User-level config directory
    pub user_dir: Option<PathBuf>,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl ConfigPaths {
    /// Discover configuration paths from environment and defaults.
    pub fn discover() -> Self {
        // User dir: TASK_API_USER_DIR or ~/.task-api
        let user_dir = std::env::var("TASK_API_USER_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".task-api")));

        // Project dir: TASK_API_PROJECT_DIR or $CWD/task-api
        let project_dir = std::env::var("TASK_API_PROJECT_DIR")
            .ok()
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from("task-api")));

        Self {
            project_dir,
            user_dir,
        }
    }

    /// Create paths with explicit directories.
    pub fn with_dirs(project_dir: Option<PathBuf>, user_dir: Option<PathBuf>) -> Self {
        Self {
            project_dir,
            user_dir,
        }
    }

    fn tier_files(&self) -> [(ConfigTier, Option<PathBuf>); 2] {
        [
            (
                ConfigTier::Project,
                self.project_dir.as_ref().map(|d| d.join("config.yaml")),
            ),
            (
                ConfigTier::User,
                self.user_dir.as_ref().map(|d| d.join("config.yaml")),
            ),
        ]
    }
}

/// Configuration loader that handles tier-based merging.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Paths for each tier
    pub paths: ConfigPaths,
    /// Loaded configuration
    config: Config,
    /// Config files that contributed, lowest tier first
    sources: Vec<(ConfigTier, PathBuf)>,
}

impl ConfigLoader {
    /// Load configuration from all tiers.
    ///
    /// An explicit path (argument or `TASK_API_CONFIG_PATH`) replaces the file
    /// tiers; environment overrides still apply on top of it.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var("TASK_API_CONFIG_PATH").ok().map(PathBuf::from));

        match explicit {
            Some(path) => Self::load_explicit(ConfigPaths::discover(), path),
            None => Self::load_with_paths(ConfigPaths::discover()),
        }
    }

    fn load_explicit(paths: ConfigPaths, path: PathBuf) -> Result<Self> {
        let mut config = Config::load(&path)
            .with_context(|| format!("failed to load config file {}", path.display()))?;
        Self::apply_env_overrides(&mut config);

        Ok(Self {
            paths,
            config,
            sources: vec![(ConfigTier::Explicit, path)],
        })
    }

    /// Load configuration with explicit tier directories.
    pub fn load_with_paths(paths: ConfigPaths) -> Result<Self> {
        let mut configs: Vec<Value> = Vec::new();
        let mut sources = Vec::new();

        // Tier 1: Defaults
        configs.push(serde_json::to_value(Config::default())?);

        // Tiers 2 and 3: project, then user
        for (tier, file) in paths.tier_files() {
            let Some(file) = file else { continue };
            if !file.exists() {
                continue;
            }
            match read_yaml(&file) {
                Ok(value) => {
                    debug!(tier = %tier, path = %file.display(), "Loaded config file");
                    configs.push(value);
                    sources.push((tier, file));
                }
                Err(e) => {
                    warn!(tier = %tier, path = %file.display(), "Ignoring unreadable config file: {}", e);
                }
            }
        }

        let merged = deep_merge_all(configs);
        let mut config: Config = serde_json::from_value(merged)?;

        // Environment variable overrides apply on top of every file tier
        Self::apply_env_overrides(&mut config);

        Ok(Self {
            paths,
            config,
            sources,
        })
    }

    /// Apply environment variable overrides to config.
    fn apply_env_overrides(config: &mut Config) {
        if let Ok(db_path) = std::env::var("TASK_API_DB_PATH") {
            config.server.db_path = PathBuf::from(db_path);
        }

        if let Ok(host) = std::env::var("TASK_API_HOST") {
            config.server.host = host;
        }

        if let Ok(port) = std::env::var("TASK_API_PORT") {
            match port.parse() {
                Ok(port) => config.server.port = port,
                Err(_) => warn!(value = %port, "Ignoring invalid TASK_API_PORT"),
            }
        }
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the loader and return the configuration.
    pub fn into_config(self) -> Config {
        self.config
    }

    /// Config files that were merged, lowest tier first.
    pub fn sources(&self) -> &[(ConfigTier, PathBuf)] {
        &self.sources
    }

    /// The highest-priority config file that was used, if any.
    pub fn config_path(&self) -> Option<&Path> {
        self.sources.last().map(|(_, path)| path.as_path())
    }
}

fn read_yaml(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str::<Value>(&content)?)
}

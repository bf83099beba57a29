//! Workspace resolution and per-install configuration for CookSync.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/CookSync/config/config.toml on Windows
//!   $XDG_DATA_HOME/CookSync/config/config.toml on Linux
//!   ~/Library/Application Support/CookSync/config/config.toml on macOS
//!
//! The config tracks the simulated session delay and the gamification caps.
//! Everything else the store persists lives under `<workspace>/store/`.

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the workspace location.
pub const WORKSPACE_ENV: &str = "COOKSYNC_HOME";

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Simulated-session knobs (artificial network delay).
    #[serde(default)]
    pub session: SessionSettings,
    /// Star-ledger caps.
    #[serde(default)]
    pub gamification: GamificationSettings,
}

/// Login/signup simulation preferences tied to the local install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Fixed artificial delay applied to login/signup, in milliseconds.
    #[serde(default = "default_simulated_delay_ms")]
    pub simulated_delay_ms: u64,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_simulated_delay_ms(),
        }
    }
}

const fn default_simulated_delay_ms() -> u64 {
    1000
}

/// Star-ledger tuning parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationSettings {
    /// Maximum stars grantable within one calendar day.
    #[serde(default = "default_daily_star_cap")]
    pub daily_star_cap: u32,
    /// Lifetime star ceiling.
    #[serde(default = "default_lifetime_star_cap")]
    pub lifetime_star_cap: u32,
}

impl Default for GamificationSettings {
    fn default() -> Self {
        Self {
            daily_star_cap: default_daily_star_cap(),
            lifetime_star_cap: default_lifetime_star_cap(),
        }
    }
}

const fn default_daily_star_cap() -> u32 {
    3
}

const fn default_lifetime_star_cap() -> u32 {
    100
}

/// Returns the root directory where CookSync stores data.
///
/// Order of precedence:
/// 1. `COOKSYNC_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(WORKSPACE_ENV) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("CookSync"))
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub store_dir: PathBuf,
    pub logs_dir: PathBuf,
}

/// Ensures the workspace structure exists at the resolved root.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let root = workspace_root()?;
    ensure_workspace_at(&root)
}

/// Ensures the workspace structure exists at an explicit root.
pub fn ensure_workspace_at(root: &Path) -> Result<WorkspacePaths> {
    let store_dir = root.join("store");
    let logs_dir = root.join("logs");
    fs::create_dir_all(&store_dir)
        .with_context(|| format!("Failed to create store directory {:?}", store_dir))?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create logs directory {:?}", logs_dir))?;
    Ok(WorkspacePaths {
        root: root.to_path_buf(),
        store_dir,
        logs_dir,
    })
}

fn config_dir(root: &Path) -> PathBuf {
    root.join("config")
}

/// Path to the config file under a workspace root.
pub fn config_file_path(root: &Path) -> PathBuf {
    config_dir(root).join(CONFIG_FILE_NAME)
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default(root: &Path) -> Result<AppConfig> {
    let path = config_file_path(root);
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save_config(root: &Path, config: &AppConfig) -> Result<()> {
    let dir = config_dir(root);
    fs::create_dir_all(&dir)?;
    let path = config_file_path(root);
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}

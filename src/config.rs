//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tunesphere\config.toml
//! - macOS: ~/Library/Application Support/tunesphere/config.toml
//! - Linux: ~/.config/tunesphere/config.toml
//!
//! The config file is human-readable and editable. Settings are loaded at
//! startup; the player section is saved again when shuffle or repeat change.
//!
//! API keys may also come from `TUNESPHERE_MINIKIT_API_KEY` and
//! `TUNESPHERE_ONCHAINKIT_API_KEY`, which override the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::player::RepeatMode;

pub const MINIKIT_KEY_ENV: &str = "TUNESPHERE_MINIKIT_API_KEY";
pub const ONCHAINKIT_KEY_ENV: &str = "TUNESPHERE_ONCHAINKIT_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Opaque host credentials (passed through, not used by core logic)
    pub credentials: Credentials,

    /// Appearance settings
    pub appearance: AppearanceConfig,

    /// Playback defaults
    pub player: PlayerConfig,

    /// Artwork loading
    pub artwork: ArtworkConfig,

    /// Catalog source and discovery
    pub catalog: CatalogConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub minikit_api_key: Option<String>,
    pub onchainkit_api_key: Option<String>,
}

/// Appearance settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Show the app header (name and tagline) above the tabs
    pub show_header: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self { show_header: true }
    }
}

/// Playback settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub shuffle: bool,
    pub repeat: RepeatMode,
}

/// Artwork loading settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkConfig {
    /// Download http(s) artwork; local files are always attempted
    pub fetch_remote: bool,

    /// Per-request timeout for remote artwork
    pub request_timeout_secs: u64,
}

impl Default for ArtworkConfig {
    fn default() -> Self {
        Self {
            fetch_remote: true,
            request_timeout_secs: 10,
        }
    }
}

impl ArtworkConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

/// Catalog settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file (.json or .toml); built-in seed data when unset
    pub path: Option<PathBuf>,

    /// Number of tracks shown under "Recommended for You"
    pub recommended_count: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            recommended_count: 6,
        }
    }
}

impl Config {
    /// Override credentials from the environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(key) = non_empty(MINIKIT_KEY_ENV) {
            self.credentials.minikit_api_key = Some(key);
        }
        if let Some(key) = non_empty(ONCHAINKIT_KEY_ENV) {
            self.credentials.onchainkit_api_key = Some(key);
        }
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tunesphere"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk, with environment overrides applied.
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let mut config = match config_path() {
        Some(path) => load_from(&path),
        None => {
            tracing::warn!("Could not determine config directory, using defaults");
            Config::default()
        }
    };
    config.apply_env_overrides();
    config
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Config {
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Update only the `[player]` section of the file at `path`.
///
/// The rest of the file is re-read from disk, so environment overrides
/// applied by [`load`] never end up in the file.
pub fn save_player_to(player: &PlayerConfig, path: &Path) -> Result<(), ConfigError> {
    let mut on_disk = load_from(path);
    on_disk.player = player.clone();
    save_to(&on_disk, path)
}

/// Save configuration to a specific file.
pub fn save_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::CreateDir(dir.to_path_buf(), e))?;
    }

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, path)
        .map_err(|e| ConfigError::Rename(temp_path, path.to_path_buf(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

/// Save the player section asynchronously (for use in Iced tasks)
pub async fn save_player_async(player: PlayerConfig) -> Result<(), ConfigError> {
    tokio::task::spawn_blocking(move || {
        let path = config_path().ok_or(ConfigError::NoConfigDir)?;
        save_player_to(&player, &path)
    })
    .await
    .map_err(|e| ConfigError::TaskJoin(e.to_string()))?
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

// ============================================================================
// Tests
// ============================================================================

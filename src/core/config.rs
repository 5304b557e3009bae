//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.masjid-quiz/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct QuizConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub slug: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub user_id: Option<String>,
    pub timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values taken from command-line flags (None = flag not given).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub lecture_id: String,
    pub slug: Option<String>,
    pub base_url: Option<String>,
    pub theme: Option<Theme>,
    pub questions_file: Option<PathBuf>,
}

// ============================================================================
// Resolved Config (concrete values, no Options where a default exists)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub lecture_id: String,
    pub slug: Option<String>,
    pub theme: Theme,
    pub api_base_url: String,
    pub user_id: Option<String>,
    pub timeout: Duration,
    /// When set, questions are read from this file instead of the API.
    pub questions_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.masjid-quiz/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".masjid-quiz").join("config.toml"))
}

/// Load config from `~/.masjid-quiz/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `QuizConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<QuizConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(QuizConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(QuizConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<QuizConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: QuizConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# masjid-quiz configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"                  # "light" or "dark"
# slug = "masjid-al-ikhlas"        # Or set MASJID_SLUG env var

# [api]
# base_url = "http://localhost:8080"   # Or set MASJID_API_BASE_URL env var
# user_id = "..."                      # Sent as X-User-Id; or MASJID_USER_ID
# timeout_secs = 15
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &QuizConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading env vars through `env` so tests stay hermetic.
pub fn resolve_with_env(
    config: &QuizConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env("MASJID_THEME").and_then(|s| parse_theme(&s)))
        .or(config.general.theme)
        .unwrap_or_default();

    // Slug: CLI → env → config
    let slug = cli
        .slug
        .clone()
        .or_else(|| env("MASJID_SLUG"))
        .or_else(|| config.general.slug.clone());

    // API base URL: CLI → env → config → default
    let api_base_url = cli
        .base_url
        .clone()
        .or_else(|| env("MASJID_API_BASE_URL"))
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

    // User id: env → config
    let user_id = env("MASJID_USER_ID").or_else(|| config.api.user_id.clone());

    ResolvedConfig {
        lecture_id: cli.lecture_id.clone(),
        slug,
        theme,
        api_base_url,
        user_id,
        timeout: Duration::from_secs(config.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        questions_file: cli.questions_file.clone(),
    }
}

fn parse_theme(value: &str) -> Option<Theme> {
    match value.trim().to_ascii_lowercase().as_str() {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        other => {
            warn!("Unknown MASJID_THEME '{}', ignoring", other);
            None
        }
    }
}

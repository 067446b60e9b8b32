//! CLI configuration management.
//!
//! Precedence, lowest first: built-in defaults, the JSON config file in the
//! platform config directory, `.env` and process environment variables, and
//! finally command-line flags.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tenseflow_client::{ClientConfig, DEFAULT_ENDPOINT};
use tenseflow_core::{GrammarProfile, ProfilePreset};
use tracing::debug;

pub const ENV_ANALYZER_URL: &str = "TENSEFLOW_ANALYZER_URL";
pub const ENV_TIMEOUT_SECS: &str = "TENSEFLOW_TIMEOUT_SECS";
pub const ENV_PROFILE: &str = "TENSEFLOW_PROFILE";
pub const ENV_PROFILE_FILE: &str = "TENSEFLOW_PROFILE_FILE";

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Analyzer endpoint receiving `POST {"sentence": ...}`.
    pub analyzer_url: String,

    /// Request timeout in seconds; unset waits indefinitely.
    pub timeout_secs: Option<u64>,

    /// Built-in grammar profile.
    pub profile: ProfilePreset,

    /// TOML grammar profile; takes priority over `profile` when set.
    pub profile_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analyzer_url: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            profile: ProfilePreset::default(),
            profile_file: None,
        }
    }
}

impl Config {
    /// Load configuration from the config file and the environment.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = Self::load_file()?;
        config.apply_env()?;
        Ok(config)
    }

    /// Load only the persisted config file, or defaults when there is none.
    pub fn load_file() -> Result<Self> {
        let Some(config_path) = Self::config_file_path() else {
            return Ok(Self::default());
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).with_context(|| {
            format!("Failed to read config from {}", config_path.display())
        })?;
        let config = serde_json::from_str(&contents).with_context(|| {
            format!("Failed to parse config file {}", config_path.display())
        })?;
        debug!(path = %config_path.display(), "config_file_loaded");
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(url) = std::env::var(ENV_ANALYZER_URL) {
            self.analyzer_url = url;
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.parse().with_context(|| {
                format!("{ENV_TIMEOUT_SECS} must be a whole number of seconds")
            })?;
            self.timeout_secs = Some(secs);
        }
        if let Ok(profile) = std::env::var(ENV_PROFILE) {
            self.profile = profile
                .parse()
                .with_context(|| format!("Invalid {ENV_PROFILE}"))?;
        }
        if let Ok(path) = std::env::var(ENV_PROFILE_FILE) {
            self.profile_file = Some(PathBuf::from(path));
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents).with_context(|| {
                format!("Failed to write config to {}", config_path.display())
            })?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "tenseflow", "tf")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        profile: Option<ProfilePreset>,
        profile_file: Option<PathBuf>,
    ) -> Self {
        if let Some(profile) = profile {
            self.profile = profile;
            // An explicit preset beats a profile file inherited from config.
            self.profile_file = None;
        }
        if profile_file.is_some() {
            self.profile_file = profile_file;
        }
        self
    }

    /// Resolve and validate the grammar profile in effect.
    pub fn grammar_profile(&self) -> Result<GrammarProfile> {
        let profile = match &self.profile_file {
            Some(path) => load_profile(path)?,
            None => self.profile.profile(),
        };
        profile.validate().context("Invalid grammar profile")?;
        Ok(profile)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.analyzer_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        }
    }
}

fn load_profile(path: &Path) -> Result<GrammarProfile> {
    GrammarProfile::load(path).with_context(|| {
        format!("Failed to load grammar profile from {}", path.display())
    })
}

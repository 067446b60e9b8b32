//! Config command implementation.
//!
//! Manages CLI configuration.

use std::path::PathBuf;

use anyhow::Result;
use tenseflow_core::ProfilePreset;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("TenseFlow CLI Configuration");
    println!("{:-<40}", "");

    println!("Analyzer URL:  {}", config.analyzer_url);
    println!(
        "Timeout:       {}",
        config
            .timeout_secs
            .map(|secs| format!("{secs} s"))
            .unwrap_or_else(|| "(none)".to_string())
    );
    println!("Profile:       {}", config.profile);
    println!(
        "Profile file:  {}",
        config
            .profile_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value in the config file.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "analyzer-url" | "url" => {
            config.analyzer_url = value.to_string();
            println!("Set analyzer-url to: {}", value);
        }
        "timeout-secs" | "timeout" => {
            config.timeout_secs = match value {
                "" | "none" => None,
                secs => Some(secs.parse()?),
            };
            println!("Set timeout-secs to: {}", value);
        }
        "profile" => {
            config.profile = value.parse::<ProfilePreset>()?;
            println!("Set profile to: {}", value);
        }
        "profile-file" => {
            config.profile_file = match value {
                "" | "none" => None,
                path => Some(PathBuf::from(path)),
            };
            println!("Set profile-file to: {}", value);
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}. Valid keys: analyzer-url, timeout-secs, profile, profile-file",
                key
            );
        }
    }

    config.save()?;
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    let value = match key {
        "analyzer-url" | "url" => config.analyzer_url.clone(),
        "timeout-secs" | "timeout" => config
            .timeout_secs
            .map(|secs| secs.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        "profile" => config.profile.to_string(),
        "profile-file" => config
            .profile_file
            .as_ref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
        _ => {
            anyhow::bail!("Unknown config key: {}", key);
        }
    };

    println!("{}", value);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}

//! # Magnum Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads the connection settings the client needs to reach the
//! orchestration API: the endpoint URL, an optional auth token, and an optional
//! request timeout. It supports a layered approach that combines a user config
//! file, a project-specific override file, and command-line/environment flags.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. `--magnum-url` / `--os-auth-token` flags (or `MAGNUM_URL` / `OS_AUTH_TOKEN`)
//! 2. Project-specific `.magnum.toml` in the current directory or its ancestors
//! 3. User-specific `config.toml` in the platform config dir (e.g. `~/.config/magnum/`)
//!
//! Path-valued entries are tilde-expanded and the merged result is validated
//! before a `Connection` is produced for the gateway.
//!
//! ## Examples
//!
//! ```toml
//! [endpoint]
//! url = "http://127.0.0.1:9511"
//! auth_token_file = "~/.magnum/token"
//! timeout_secs = 30
//! ```
//!
//! ```rust
//! let mut cfg = config::load_config()?;
//! cfg.apply_overrides(cli.magnum_url, cli.os_auth_token);
//! let connection = cfg.connection()?;
//! ```
//!
use crate::core::error::{MagnumError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};
use tracing::{debug, info, warn};
use url::Url;

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
}

/// Where and how to reach the orchestration API.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EndpointConfig {
    /// Base URL of the API, e.g. `http://127.0.0.1:9511`.
    pub url: Option<String>,
    /// Token sent as `X-Auth-Token`.
    pub auth_token: Option<String>,
    /// File holding the token (can use ~). Only read when `auth_token` is unset.
    pub auth_token_file: Option<String>,
    /// Request timeout. Unset means the transport default.
    pub timeout_secs: Option<u64>,
}

/// Fully resolved connection settings handed to the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub url: Url,
    pub auth_token: Option<String>,
    pub timeout: Option<Duration>,
}

const PROJECT_CONFIG_FILENAME: &str = ".magnum.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!(
        "Loaded configuration (endpoint url: {:?})",
        merged_config.endpoint.url
    );
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("org", "OpenStack", "magnum") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path()? {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.magnum.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    Ok(find_project_config_from(&current_dir))
}

/// Walks up from `start` until a `.magnum.toml` is found or a `.git` directory
/// marks the repository root.
fn find_project_config_from(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project) = project else {
        return user;
    };
    Config {
        endpoint: EndpointConfig {
            url: project.endpoint.url.or(user.endpoint.url),
            auth_token: project.endpoint.auth_token.or(user.endpoint.auth_token),
            auth_token_file: project
                .endpoint
                .auth_token_file
                .or(user.endpoint.auth_token_file),
            timeout_secs: project.endpoint.timeout_secs.or(user.endpoint.timeout_secs),
        },
    }
}

fn expand_config_paths(config: &mut Config) {
    if let Some(token_file) = config.endpoint.auth_token_file.as_mut() {
        *token_file = shellexpand::tilde(token_file.as_str()).into_owned();
        debug!("Expanded auth token file path: {}", token_file);
    }
}

/// Checks file-only settings. The endpoint URL is checked in `connection()`,
/// after command-line overrides have been applied.
fn validate_config(config: &Config) -> Result<()> {
    if config.endpoint.timeout_secs == Some(0) {
        return Err(anyhow!(MagnumError::Config(
            "timeout_secs must be greater than zero.".to_string()
        )));
    }
    Ok(())
}

fn parse_endpoint_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        anyhow!(MagnumError::Config(format!(
            "Invalid endpoint URL '{}': {}",
            raw, e
        )))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(anyhow!(MagnumError::Config(format!(
            "Endpoint URL '{}' must use http or https.",
            raw
        ))));
    }
    Ok(url)
}

impl Config {
    /// Applies command-line (or environment) values on top of the file settings.
    pub fn apply_overrides(&mut self, url: Option<String>, auth_token: Option<String>) {
        if url.is_some() {
            self.endpoint.url = url;
        }
        if auth_token.is_some() {
            self.endpoint.auth_token = auth_token;
        }
    }

    /// Resolves the settings into a `Connection`, reading the token file if needed.
    ///
    /// Fails with `MagnumError::Config` when no endpoint is configured.
    pub fn connection(&self) -> Result<Connection> {
        let raw_url = self.endpoint.url.as_deref().ok_or_else(|| {
            anyhow!(MagnumError::Config(
                "No API endpoint configured. Use --magnum-url, MAGNUM_URL, or [endpoint] url in config.toml."
                    .to_string()
            ))
        })?;
        let url = parse_endpoint_url(raw_url)?;

        let auth_token = match (&self.endpoint.auth_token, &self.endpoint.auth_token_file) {
            (Some(token), _) => Some(token.clone()),
            (None, Some(path)) => {
                let token = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read auth token file: {}", path))?;
                Some(token.trim().to_string())
            }
            (None, None) => None,
        };

        Ok(Connection {
            url,
            auth_token,
            timeout: self.endpoint.timeout_secs.map(Duration::from_secs),
        })
    }
}

//! Site configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub gate: GateConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind the HTTP listener to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP port
    #[serde(default = "default_http_port")]
    pub http_port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Title shown on the listing page and in footers
    #[serde(default = "default_title")]
    pub title: String,

    /// Listing page lead paragraph
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Directory holding cover and illustration images
    #[serde(default = "default_asset_dir")]
    pub asset_dir: PathBuf,
}

/// Display gate settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GateConfig {
    /// Render gates at all. Off is convenient for local preview.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Token for the listing page
    #[serde(default = "default_hub_token")]
    pub hub_token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

// Defaults
fn default_bind_address() -> String { "0.0.0.0".to_string() }
fn default_http_port() -> u16 { 8080 }
fn default_title() -> String { "Growth Diagnosis Tool".to_string() }
fn default_tagline() -> String {
    "Strategic brand analysis powered by AI. Uncover growth barriers, identify opportunities, \
     and build actionable growth systems."
        .to_string()
}
fn default_asset_dir() -> PathBuf { PathBuf::from("public") }
fn default_true() -> bool { true }
fn default_hub_token() -> String { "gdt2026".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            http_port: default_http_port(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tagline: default_tagline(),
            asset_dir: default_asset_dir(),
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            hub_token: default_hub_token(),
        }
    }
}

impl Config {
    /// Parse a TOML document
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }
}

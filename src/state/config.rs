//! Application configuration with persistence.
//!
//! This module provides the [`AppConfig`] structure for managing application
//! settings with load/save to disk.
//!
//! # Configuration File Location
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/positively/config.json`
//! - macOS: `~/Library/Application Support/positively/config.json`
//! - Windows: `%APPDATA%/positively/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::AppConfig;
//!
//! let mut config = AppConfig::load();
//! config.offline = true;
//! config.save().expect("Failed to save config");
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::client::{DEFAULT_RELAY_URL, DEFAULT_TIMEOUT_SECS, HttpConfig};
use crate::widgets::DEFAULT_ITEMS_PER_PAGE;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
pub const APP_NAME: &str = "positively";

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Tags requested from the quotes service unless configured otherwise.
pub const DEFAULT_QUOTE_TAGS: [&str; 2] = ["inspirational", "motivational"];

// ============================================================================
// Affirmation Layout
// ============================================================================

/// How the affirmations page lays out its categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffirmationLayout {
    /// Teaser sections with a show more/less toggle.
    #[default]
    Expandable,
    /// One paginator per category.
    Paged,
}

impl AffirmationLayout {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expandable => Self::Paged,
            Self::Paged => Self::Expandable,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Expandable => "expandable",
            Self::Paged => "paged",
        }
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
///
/// Every field has a default, so a partial file (or an older one) still loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Skip every remote request and serve the local catalog only.
    pub offline: bool,
    /// Items shown per page by every paginator.
    pub items_per_page: usize,
    /// Initial layout of the affirmations page.
    pub affirmation_layout: AffirmationLayout,
    /// Tags sent to the quotes service.
    pub quote_tags: Vec<String>,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Forwarding relay every request goes through.
    pub relay_url: String,
    /// Derive the daily picks from today's date instead of per launch.
    pub stable_daily: bool,
    /// Optional JSON catalog replacing the built-in content.
    pub content_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            offline: false,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            affirmation_layout: AffirmationLayout::default(),
            quote_tags: DEFAULT_QUOTE_TAGS.iter().map(|t| (*t).to_string()).collect(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            relay_url: DEFAULT_RELAY_URL.to_string(),
            stable_daily: false,
            content_file: None,
        }
    }
}

impl AppConfig {
    /// Returns the application's configuration directory, creating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_dir() -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            color_eyre::eyre::eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(APP_NAME);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Loads the configuration from disk.
    ///
    /// A missing or unparsable file yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::info!(%err, "config not loaded, using defaults");
                Self::default()
            }
        }
    }

    /// Attempts to load the configuration from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The file cannot be read
    /// - The JSON content cannot be parsed
    pub fn try_load() -> Result<Self> {
        let path = Self::config_path()?;
        let content = fs::read_to_string(&path)?;
        Self::from_json(&content)
    }

    /// Parses a configuration document and normalizes it.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON content cannot be parsed.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.normalized())
    }

    /// Saves the configuration to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration path cannot be determined
    /// - The configuration cannot be serialized
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Clamps values that would break paging or requests.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.items_per_page = self.items_per_page.max(1);
        self.request_timeout_secs = self.request_timeout_secs.max(1);
        if self.relay_url.trim().is_empty() {
            self.relay_url = DEFAULT_RELAY_URL.to_string();
        }
        self
    }

    /// HTTP settings derived from this configuration.
    #[must_use]
    pub fn http_config(&self) -> HttpConfig {
        HttpConfig::with_timeout(Duration::from_secs(self.request_timeout_secs))
            .with_relay(self.relay_url.clone())
    }
}

// ============================================================================
// Tests
// ============================================================================

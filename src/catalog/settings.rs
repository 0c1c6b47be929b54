//! Settings loaded from a TOML file.
//!
//! ```toml
//! category = "colors"
//! input = "swipe"
//! marker = "$"
//! swipe_threshold = 50.0
//!
//! [[categories]]
//! name = "colors"
//! words = ["rouge", "vert", "bleu", "jaune"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::{CatalogError, Category, CategoryRegistry, ZODIAC};
use crate::input::{InputMethod, SwipeTracker};
use crate::peer::PeerCodec;

/// Errors that can occur when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    Validation { message: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A category declared in the settings file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub words: Vec<String>,
}

/// Game and peer settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Active category name.
    pub category: String,

    /// Answer source: `"swipe"` or `"peer"` (`"bluetooth"` also accepted).
    pub input: InputMethod,

    /// Marker prefixed to every line sent to the peer.
    pub marker: char,

    /// Minimum vertical swipe distance (pixels) that counts as an answer.
    pub swipe_threshold: f32,

    /// Extra categories on top of the built-ins.
    pub categories: Vec<CategoryConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            category: ZODIAC.to_string(),
            input: InputMethod::Swipe,
            marker: '$',
            swipe_threshold: 50.0,
            categories: Vec::new(),
        }
    }
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// - If the file doesn't exist, returns `Settings::default()`.
    /// - Otherwise parses it as TOML and validates it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }

    /// Parse and validate settings from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let settings: Settings = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Set the active category.
    #[must_use]
    pub fn with_category(mut self, name: impl Into<String>) -> Self {
        self.category = name.into();
        self
    }

    /// Set the answer source.
    #[must_use]
    pub fn with_input(mut self, input: InputMethod) -> Self {
        self.input = input;
        self
    }

    /// Set the peer line marker.
    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    /// Set the swipe threshold.
    #[must_use]
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Checks:
    /// - the swipe threshold is positive
    /// - the marker is not a line break
    /// - every configured category is valid and uniquely named
    /// - the active category exists
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.swipe_threshold > 0.0) {
            return Err(ConfigError::Validation {
                message: format!("swipe_threshold must be positive, got {}", self.swipe_threshold),
            });
        }

        if self.marker == '\n' || self.marker == '\r' {
            return Err(ConfigError::Validation {
                message: "marker cannot be a line break".to_string(),
            });
        }

        let registry = self.registry()?;
        if !registry.contains(&self.category) {
            return Err(ConfigError::Validation {
                message: format!("active category '{}' is not defined", self.category),
            });
        }

        Ok(())
    }

    /// Codec framing peer lines with the configured marker.
    #[must_use]
    pub fn codec(&self) -> PeerCodec {
        PeerCodec::new(self.marker)
    }

    /// Swipe tracker using the configured threshold, if swipes are the
    /// configured input.
    #[must_use]
    pub fn swipe_tracker(&self) -> Option<SwipeTracker> {
        self.input
            .accepts_swipes()
            .then(|| SwipeTracker::new(self.swipe_threshold))
    }

    /// Build the registry: built-ins plus configured categories.
    pub fn registry(&self) -> Result<CategoryRegistry, CatalogError> {
        let mut registry = CategoryRegistry::with_builtins();
        for config in &self.categories {
            registry.register(Category::new(config.name.clone(), &config.words)?)?;
        }
        Ok(registry)
    }
}

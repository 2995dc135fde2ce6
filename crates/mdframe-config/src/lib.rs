//! mdframe Config
//!
//! This crate handles configuration loading and management
//! for mdframe, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/mdframe/config.toml`
//! - macOS: `~/Library/Application Support/mdframe/config.toml`
//! - Windows: `%APPDATA%\mdframe\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use mdframe_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//!
//! // Or layer an override file (or inline TOML) on top
//! let mut config = Config::load().unwrap();
//! config.merge(&Config::parse_override("./custom.toml").unwrap());
//! ```

mod computed;
mod layout;
mod theme;
mod typography;

pub use computed::{paint_from_hex, ComputedTheme};
pub use layout::LayoutConfig;
pub use theme::{ThemeConfig, TranslucentColor};
pub use typography::TypographyConfig;

use mdframe_core::{MdframeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r##"[theme]
Background            = "#EBEBEB"
Link                  = "#004BFA"
Border                = "#777777"
FormattedText         = "#000000"
BodyText              = "#333333"
CodeBackground        = { Color = "#FFFFFF", Opacity = 0.8 }
TableHeaderBackground = { Color = "#808080", Opacity = 0.2 }

[typography]
BodyFont      = "Roboto"
MonoFont      = "Roboto Mono"
HeadingSizes  = [20.0, 18.0, 16.0, 14.0, 12.0, 10.0]
ParagraphSize = 12.0

[layout]
RootPadding     = 24.0
RootSpacing     = 8.0
TableWidth      = 600.0
RuleWidth       = 600.0
CodePadding     = 16.0
CornerRadius    = 6.0
CellPadding     = 12.0
QuotePadding    = 8.0
ListSpacing     = 4.0
ListItemSpacing = 8.0
"##;

/// Main configuration structure.
///
/// Contains all configuration sections for mdframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Color tokens
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Font families and sizes
    #[serde(default)]
    pub typography: TypographyConfig,

    /// Paddings, spacings and fixed widths
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    ///
    /// # Example
    ///
    /// ```
    /// use mdframe_config::Config;
    /// let toml = Config::default_toml();
    /// assert!(toml.contains("[theme]"));
    /// assert!(toml.contains("[layout]"));
    /// ```
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "mdframe")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                return Self::load_from(&config_path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| MdframeError::Config(format!("{} (in {})", e, path.display())))
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    ///
    /// ```
    /// use mdframe_config::Config;
    /// let config = Config::from_toml("[layout]\nTableWidth = 400.0").unwrap();
    /// assert_eq!(config.layout.table_width, 400.0);
    /// assert_eq!(config.typography.body_font, "Roboto");
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MdframeError::Config(format!("Parse error: {}", e)))
    }

    /// Interpret an override argument as a file path if one exists,
    /// otherwise as inline TOML.
    pub fn parse_override(override_str: &str) -> Result<Self> {
        let override_path = Path::new(override_str);
        if override_path.is_file() {
            Self::load_from(override_path)
        } else {
            toml::from_str(override_str)
                .map_err(|e| MdframeError::Config(format!("Override parse error: {}", e)))
        }
    }

    /// Merge another config into this one.
    ///
    /// Values from `other` take precedence over values in `self`.
    ///
    /// ```
    /// use mdframe_config::Config;
    ///
    /// let mut base = Config::default();
    /// let other = Config::from_toml("[typography]\nBodyFont = \"Inter\"").unwrap();
    ///
    /// base.merge(&other);
    /// assert_eq!(base.typography.body_font, "Inter");
    /// ```
    pub fn merge(&mut self, other: &Config) {
        self.theme.merge(&other.theme);
        self.typography.merge(&other.typography);
        self.layout.merge(&other.layout);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| MdframeError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }

    /// Resolve this configuration into render tokens.
    pub fn computed_theme(&self) -> ComputedTheme {
        ComputedTheme::from_config(self)
    }
}

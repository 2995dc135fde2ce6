//! Color token configuration.
//!
//! Colors are stored as hex strings so the TOML file stays readable;
//! [`ComputedTheme`](crate::ComputedTheme) resolves them to paints.

use serde::{Deserialize, Serialize};

/// A hex color with an opacity, for the translucent tokens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TranslucentColor {
    pub color: String,
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

impl TranslucentColor {
    pub fn new(color: &str, opacity: f32) -> Self {
        Self {
            color: color.to_string(),
            opacity,
        }
    }

    /// Translucent white behind code blocks and table bodies.
    pub fn code_background() -> Self {
        Self::new("#FFFFFF", 0.8)
    }

    /// Translucent grey behind the first table row.
    pub fn table_header_background() -> Self {
        Self::new("#808080", 0.2)
    }
}

/// Theme configuration: the fixed token table of the render engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ThemeConfig {
    /// Root frame fill.
    /// Default: "#EBEBEB"
    #[serde(default = "default_background")]
    pub background: String,

    /// Link label fill.
    /// Default: "#004BFA"
    #[serde(default = "default_link")]
    pub link: String,

    /// Strokes on quotes, rules, code blocks and tables.
    /// Default: "#777777"
    #[serde(default = "default_border")]
    pub border: String,

    /// Headings, code and table text.
    /// Default: "#000000"
    #[serde(default = "default_formatted_text")]
    pub formatted_text: String,

    /// Paragraph, quote and list text.
    /// Default: "#333333"
    #[serde(default = "default_body_text")]
    pub body_text: String,

    #[serde(default = "TranslucentColor::code_background")]
    pub code_background: TranslucentColor,

    #[serde(default = "TranslucentColor::table_header_background")]
    pub table_header_background: TranslucentColor,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            link: default_link(),
            border: default_border(),
            formatted_text: default_formatted_text(),
            body_text: default_body_text(),
            code_background: TranslucentColor::code_background(),
            table_header_background: TranslucentColor::table_header_background(),
        }
    }
}

impl ThemeConfig {
    /// Merge another ThemeConfig into this one.
    pub fn merge(&mut self, other: &ThemeConfig) {
        self.background.clone_from(&other.background);
        self.link.clone_from(&other.link);
        self.border.clone_from(&other.border);
        self.formatted_text.clone_from(&other.formatted_text);
        self.body_text.clone_from(&other.body_text);
        self.code_background.clone_from(&other.code_background);
        self.table_header_background
            .clone_from(&other.table_header_background);
    }
}

fn default_opacity() -> f32 {
    1.0
}

fn default_background() -> String {
    "#EBEBEB".to_string()
}

fn default_link() -> String {
    "#004BFA".to_string()
}

fn default_border() -> String {
    "#777777".to_string()
}

fn default_formatted_text() -> String {
    "#000000".to_string()
}

fn default_body_text() -> String {
    "#333333".to_string()
}

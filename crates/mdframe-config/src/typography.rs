//! Typography configuration.

use serde::{Deserialize, Serialize};

/// Font families and sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypographyConfig {
    /// Family for headings, paragraphs, quotes, lists, tables and links.
    /// Default: "Roboto"
    #[serde(default = "default_body_font")]
    pub body_font: String,

    /// Family for code blocks and inline code.
    /// Default: "Roboto Mono"
    #[serde(default = "default_mono_font")]
    pub mono_font: String,

    /// Font sizes for heading levels 1 through 6.
    /// Default: [20, 18, 16, 14, 12, 10]
    #[serde(default = "default_heading_sizes")]
    pub heading_sizes: [f32; 6],

    /// Size for every non-heading text node.
    /// Default: 12
    #[serde(default = "default_paragraph_size")]
    pub paragraph_size: f32,
}

impl Default for TypographyConfig {
    fn default() -> Self {
        Self {
            body_font: default_body_font(),
            mono_font: default_mono_font(),
            heading_sizes: default_heading_sizes(),
            paragraph_size: default_paragraph_size(),
        }
    }
}

impl TypographyConfig {
    /// Merge another TypographyConfig into this one.
    pub fn merge(&mut self, other: &TypographyConfig) {
        self.body_font.clone_from(&other.body_font);
        self.mono_font.clone_from(&other.mono_font);
        self.heading_sizes = other.heading_sizes;
        self.paragraph_size = other.paragraph_size;
    }
}

fn default_body_font() -> String {
    "Roboto".to_string()
}

fn default_mono_font() -> String {
    "Roboto Mono".to_string()
}

fn default_heading_sizes() -> [f32; 6] {
    [20.0, 18.0, 16.0, 14.0, 12.0, 10.0]
}

fn default_paragraph_size() -> f32 {
    12.0
}

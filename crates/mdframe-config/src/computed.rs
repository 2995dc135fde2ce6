//! Computed theme values.
//!
//! This module contains `ComputedTheme` which holds the configuration
//! resolved into the paints, fonts and sizes the render engine uses.

use crate::layout::LayoutConfig;
use crate::theme::TranslucentColor;
use crate::Config;
use mdframe_core::{InlineTheme, Paint, Rgb};

/// Resolved render tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedTheme {
    pub background: Paint,
    pub link: Paint,
    pub border: Paint,
    pub formatted_text: Paint,
    pub body_text: Paint,
    pub code_background: Paint,
    pub table_header_background: Paint,

    pub body_font: String,
    pub mono_font: String,
    pub heading_sizes: [f32; 6],
    pub paragraph_size: f32,

    pub layout: LayoutConfig,
}

impl Default for ComputedTheme {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ComputedTheme {
    /// Resolve a configuration. Unparseable hex colors become black.
    pub fn from_config(config: &Config) -> Self {
        let theme = &config.theme;
        let typography = &config.typography;

        Self {
            background: paint_from_hex(&theme.background, 1.0),
            link: paint_from_hex(&theme.link, 1.0),
            border: paint_from_hex(&theme.border, 1.0),
            formatted_text: paint_from_hex(&theme.formatted_text, 1.0),
            body_text: paint_from_hex(&theme.body_text, 1.0),
            code_background: translucent(&theme.code_background),
            table_header_background: translucent(&theme.table_header_background),
            body_font: typography.body_font.clone(),
            mono_font: typography.mono_font.clone(),
            heading_sizes: typography.heading_sizes,
            paragraph_size: typography.paragraph_size,
            layout: config.layout,
        }
    }

    /// Size for a heading level; out-of-range levels use the paragraph size.
    pub fn heading_size(&self, level: u8) -> f32 {
        match level {
            1..=6 => self.heading_sizes[usize::from(level) - 1],
            _ => self.paragraph_size,
        }
    }

    /// The subset of tokens the inline resolver needs.
    pub fn inline_theme(&self) -> InlineTheme {
        InlineTheme {
            body_font: self.body_font.clone(),
            mono_font: self.mono_font.clone(),
            link_color: self.link.color,
        }
    }
}

/// Build a paint from a hex string, falling back to black.
pub fn paint_from_hex(hex: &str, opacity: f32) -> Paint {
    Paint::with_opacity(Rgb::from_hex(hex).unwrap_or(Rgb::BLACK), opacity)
}

fn translucent(color: &TranslucentColor) -> Paint {
    paint_from_hex(&color.color, color.opacity.clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let computed = ComputedTheme::default();
        assert_eq!(computed.background.color, Rgb::from_hex("#EBEBEB").unwrap());
        assert_eq!(computed.code_background, Paint::with_opacity(Rgb::WHITE, 0.8));
        assert!((computed.table_header_background.color.r - 0.5).abs() < 0.01);
        assert_eq!(computed.table_header_background.opacity, 0.2);
        assert_eq!(computed.heading_size(2), 18.0);
    }

    #[test]
    fn test_invalid_hex_falls_back_to_black() {
        assert_eq!(paint_from_hex("not-a-color", 0.5), Paint::with_opacity(Rgb::BLACK, 0.5));
    }

    #[test]
    fn test_inline_theme_follows_config() {
        let mut config = Config::default();
        config.theme.link = "#FF0000".to_string();
        config.typography.mono_font = "Iosevka".to_string();

        let inline = ComputedTheme::from_config(&config).inline_theme();
        assert_eq!(inline.link_color, Rgb::new(1.0, 0.0, 0.0));
        assert_eq!(inline.mono_font, "Iosevka");
        assert_eq!(inline.body_font, "Roboto");
    }

    #[test]
    fn test_default_matches_core_inline_theme() {
        let inline = ComputedTheme::default().inline_theme();
        let core = InlineTheme::default();
        assert_eq!(inline.body_font, core.body_font);
        assert_eq!(inline.mono_font, core.mono_font);
        assert!((inline.link_color.b - core.link_color.b).abs() < 0.001);
    }
}

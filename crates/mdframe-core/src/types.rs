//! Style primitives shared by the parser and the render engine.

use serde::{Deserialize, Serialize};

/// An RGB color with channels in the `0.0..=1.0` range.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    /// Black.
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);

    /// Create a color from unit-range channels.
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#004BFA` or `004bfa`.
    ///
    /// # Example
    ///
    /// ```
    /// use mdframe_core::Rgb;
    /// let c = Rgb::from_hex("#FF0000").unwrap();
    /// assert_eq!(c, Rgb::new(1.0, 0.0, 0.0));
    /// assert!(Rgb::from_hex("red").is_none());
    /// ```
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

        Some(Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
        ))
    }

    /// Format as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02X}{:02X}{:02X}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

/// A solid paint: color plus opacity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    pub color: Rgb,
    pub opacity: f32,
}

impl Paint {
    /// Fully opaque paint.
    pub const fn solid(color: Rgb) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Paint with explicit opacity.
    pub const fn with_opacity(color: Rgb, opacity: f32) -> Self {
        Self { color, opacity }
    }
}

/// A font identified by family and style name, e.g. `Roboto` / `Bold Italic`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FontName {
    pub family: String,
    pub style: String,
}

impl FontName {
    pub fn new(family: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: style.into(),
        }
    }

    /// Parse `Family:Style`. A missing style means `Regular`.
    ///
    /// ```
    /// use mdframe_core::FontName;
    /// assert_eq!(FontName::parse("Roboto:Bold"), Some(FontName::new("Roboto", "Bold")));
    /// assert_eq!(FontName::parse("Inter"), Some(FontName::new("Inter", "Regular")));
    /// assert_eq!(FontName::parse(":Bold"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let (family, style) = match s.split_once(':') {
            Some((family, style)) => (family.trim(), style.trim()),
            None => (s.trim(), "Regular"),
        };
        if family.is_empty() || style.is_empty() {
            return None;
        }
        Some(Self::new(family, style))
    }
}

impl std::fmt::Display for FontName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.family, self.style)
    }
}

/// The style inputs the inline resolver bakes into link and code spans.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineTheme {
    /// Family used for link labels
    pub body_font: String,
    /// Family used for inline code
    pub mono_font: String,
    /// Fill applied to link labels
    pub link_color: Rgb,
}

impl Default for InlineTheme {
    fn default() -> Self {
        Self {
            body_font: "Roboto".to_string(),
            mono_font: "Roboto Mono".to_string(),
            link_color: Rgb::new(0.0, 0.294, 0.980),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let link = Rgb::from_hex("#004BFA").unwrap();
        assert!((link.g - 0.294).abs() < 0.001);
        assert!((link.b - 0.980).abs() < 0.001);
        assert_eq!(Rgb::from_hex("ffffff"), Some(Rgb::WHITE));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#GGGGGG"), None);
        assert_eq!(Rgb::from_hex("#ééé"), None);
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::from_hex("#777777").unwrap().to_hex(), "#777777");
        assert_eq!(Rgb::new(2.0, -1.0, 0.0).to_hex(), "#FF0000");
    }

    #[test]
    fn test_font_name_display() {
        assert_eq!(FontName::new("Roboto", "Bold").to_string(), "Roboto Bold");
    }
}

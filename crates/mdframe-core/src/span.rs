//! Character-offset formatting spans.
//!
//! Offsets are counted in Unicode scalar values (`char`s) of the plain text
//! a span belongs to, never in bytes. A span covering `"é"` in `"café"` is
//! `3..4`, even though the byte range is `3..5`.

use serde::{Deserialize, Serialize};

use crate::types::Rgb;

/// Optional style overrides carried by a span.
///
/// Every field is independently optional; `None` means "inherit from the
/// block's base style".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleAttrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hyperlink: Option<String>,
}

impl StyleAttrs {
    /// Style with only a font style name set.
    pub fn font_style(style: impl Into<String>) -> Self {
        Self {
            font_style: Some(style.into()),
            ..Default::default()
        }
    }

    /// Style with only a font family set.
    pub fn font_family(family: impl Into<String>) -> Self {
        Self {
            font_family: Some(family.into()),
            ..Default::default()
        }
    }

    /// Whether any attribute affecting the font (family, style, size or
    /// the bold/italic flags) is present.
    pub fn touches_font(&self) -> bool {
        self.bold.unwrap_or(false)
            || self.italic.unwrap_or(false)
            || self.font_family.is_some()
            || self.font_style.is_some()
            || self.font_size.is_some()
    }

    pub fn is_code(&self) -> bool {
        self.code.unwrap_or(false)
    }
}

/// A styled half-open `[start, end)` range of a block's plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub style: StyleAttrs,
}

impl Span {
    pub fn new(start: usize, end: usize, style: StyleAttrs) -> Self {
        Self { start, end, style }
    }

    /// Length in chars.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clamp this span to a text of `len` chars.
    ///
    /// Returns `None` when nothing of the span is left to style.
    ///
    /// ```
    /// use mdframe_core::{Span, StyleAttrs};
    /// let span = Span::new(2, 10, StyleAttrs::default());
    /// assert_eq!(span.clamped(5), Some((2, 5)));
    /// assert_eq!(span.clamped(2), None);
    /// ```
    pub fn clamped(&self, len: usize) -> Option<(usize, usize)> {
        let start = self.start.min(len);
        let end = self.end.min(len).max(start);
        (start < end).then_some((start, end))
    }
}

/// Length of `text` in the unit span offsets are counted in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touches_font() {
        assert!(!StyleAttrs::default().touches_font());
        assert!(StyleAttrs::font_style("Bold").touches_font());
        assert!(StyleAttrs::font_family("Roboto Mono").touches_font());

        let code_only = StyleAttrs {
            code: Some(true),
            ..Default::default()
        };
        assert!(!code_only.touches_font());
        assert!(code_only.is_code());

        let link_fill = StyleAttrs {
            fill_color: Some(Rgb::BLACK),
            hyperlink: Some("https://example.com".into()),
            ..Default::default()
        };
        assert!(!link_fill.touches_font());
    }

    #[test]
    fn test_clamped_inverted_span() {
        let span = Span::new(4, 1, StyleAttrs::default());
        assert_eq!(span.clamped(10), None);
        assert!(span.is_empty());
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("café"), 4);
        assert_eq!(char_len("日本語"), 3);
        assert_eq!(char_len(""), 0);
    }

    #[test]
    fn test_style_serializes_only_present_fields() {
        let json = serde_json::to_string(&StyleAttrs::font_style("Bold")).unwrap();
        assert_eq!(json, r#"{"font_style":"Bold"}"#);
    }
}

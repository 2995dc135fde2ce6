//! Host seam.
//!
//! Everything the render engine needs from the design tool goes through
//! [`Host`]: font loading, text measurement and the viewport centre.
//! [`MemoryHost`] is an in-process implementation used by the CLI and tests.

use std::collections::BTreeSet;

use mdframe_core::FontName;
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use crate::node::{Point, Size};

/// Average glyph advance as a fraction of the font size.
const ADVANCE_EM: f32 = 0.6;

/// Line height as a fraction of the font size.
const LINE_HEIGHT_EM: f32 = 1.2;

/// Font loading failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FontError {
    /// The font does not exist on the host. Rendering continues without it.
    #[error("font \"{0}\" is not available")]
    Unavailable(FontName),

    /// The host itself failed. Rendering is aborted.
    #[error("host error: {0}")]
    Host(String),
}

/// Capabilities of the design tool the tree is rendered for.
pub trait Host {
    /// Make a font usable. Called before any node references it.
    fn load_font(&mut self, font: &FontName) -> Result<(), FontError>;

    /// Font a freshly created text node starts with.
    fn default_font(&self) -> FontName {
        FontName::new("Inter", "Regular")
    }

    /// Estimate the size of `text` set at `font_size`.
    fn measure_text(&self, text: &str, font_size: f32) -> Size {
        estimate_text_size(text, font_size)
    }

    /// Centre of the visible canvas area.
    fn viewport_center(&self) -> Point;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn load_font(&mut self, font: &FontName) -> Result<(), FontError> {
        (**self).load_font(font)
    }

    fn default_font(&self) -> FontName {
        (**self).default_font()
    }

    fn measure_text(&self, text: &str, font_size: f32) -> Size {
        (**self).measure_text(text, font_size)
    }

    fn viewport_center(&self) -> Point {
        (**self).viewport_center()
    }
}

/// Column-based size estimate: display width of the widest line times
/// [`ADVANCE_EM`], and one [`LINE_HEIGHT_EM`] per line.
///
/// ```
/// use mdframe_render::estimate_text_size;
/// let size = estimate_text_size("abcd\nab", 10.0);
/// assert!((size.width - 24.0).abs() < 1e-4);
/// assert!((size.height - 24.0).abs() < 1e-4);
/// ```
pub fn estimate_text_size(text: &str, font_size: f32) -> Size {
    let mut lines = 0usize;
    let mut columns = 0usize;
    for line in text.split('\n') {
        lines += 1;
        columns = columns.max(line.width());
    }

    Size::new(
        columns as f32 * font_size * ADVANCE_EM,
        lines as f32 * font_size * LINE_HEIGHT_EM,
    )
}

/// In-memory host.
///
/// By default every font is available. [`MemoryHost::with_fonts`] restricts
/// the set, and [`MemoryHost::set_offline`] makes every load fail with
/// [`FontError::Host`].
#[derive(Debug, Clone, Default)]
pub struct MemoryHost {
    available: Option<BTreeSet<FontName>>,
    viewport: Point,
    load_log: Vec<FontName>,
    offline: bool,
}

impl MemoryHost {
    /// A host with every font available and the viewport centred on the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// A host where only `fonts` can be loaded.
    pub fn with_fonts<I>(fonts: I) -> Self
    where
        I: IntoIterator<Item = FontName>,
    {
        Self {
            available: Some(fonts.into_iter().collect()),
            ..Self::default()
        }
    }

    pub fn with_viewport(mut self, center: Point) -> Self {
        self.viewport = center;
        self
    }

    /// Add a font to a restricted host. No effect on a permissive host.
    pub fn add_font(&mut self, font: FontName) {
        if let Some(available) = self.available.as_mut() {
            available.insert(font);
        }
    }

    pub fn set_offline(&mut self, offline: bool) {
        self.offline = offline;
    }

    pub fn is_available(&self, font: &FontName) -> bool {
        self.available
            .as_ref()
            .map_or(true, |available| available.contains(font))
    }

    /// Every load request in the order it was made, successful or not.
    pub fn load_log(&self) -> &[FontName] {
        &self.load_log
    }

    pub fn clear_log(&mut self) {
        self.load_log.clear();
    }
}

impl Host for MemoryHost {
    fn load_font(&mut self, font: &FontName) -> Result<(), FontError> {
        if self.offline {
            return Err(FontError::Host("host is offline".to_string()));
        }

        self.load_log.push(font.clone());
        if self.is_available(font) {
            Ok(())
        } else {
            Err(FontError::Unavailable(font.clone()))
        }
    }

    fn viewport_center(&self) -> Point {
        self.viewport
    }
}

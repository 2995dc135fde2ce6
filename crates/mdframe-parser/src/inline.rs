//! Inline span resolver.
//!
//! Turns one line (or one joined paragraph) of raw inline markup into plain
//! text plus formatting spans. Links, bold, italic and inline code are
//! recognised; none of them nest. The scan only moves forward, so spans come
//! out ordered and never overlap.

use mdframe_core::{InlineTheme, Span, StyleAttrs};

/// Plain text plus the spans styling it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InlineText {
    pub text: String,
    pub spans: Vec<Span>,
}

/// Output accumulator. Tracks the text length in chars so span offsets
/// never need a recount.
#[derive(Debug, Default)]
struct Output {
    text: String,
    len: usize,
    spans: Vec<Span>,
}

impl Output {
    fn push(&mut self, c: char) {
        self.text.push(c);
        self.len += 1;
    }

    fn push_styled(&mut self, content: &[char], style: StyleAttrs) {
        let start = self.len;
        self.text.extend(content);
        self.len += content.len();
        self.spans.push(Span::new(start, self.len, style));
    }

    fn finish(self) -> InlineText {
        InlineText {
            text: self.text,
            spans: self.spans,
        }
    }
}

/// Inline markdown resolver.
///
/// Link and code spans carry font and color values from the
/// [`InlineTheme`] the resolver was built with.
#[derive(Debug, Clone, Default)]
pub struct InlineParser {
    theme: InlineTheme,
}

impl InlineParser {
    /// Create a resolver with the default inline theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver with a specific inline theme.
    pub fn with_theme(theme: InlineTheme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &InlineTheme {
        &self.theme
    }

    /// Resolve a line of inline markup.
    ///
    /// At each position the markers are tried in order link, bold, italic,
    /// code; the first that matches consumes its whole construct. A marker
    /// without a closer falls through to the next rule and finally to a
    /// literal copy of one char.
    ///
    /// ```
    /// use mdframe_parser::InlineParser;
    /// let resolved = InlineParser::new().resolve("Hello **world**.");
    /// assert_eq!(resolved.text, "Hello world.");
    /// assert_eq!((resolved.spans[0].start, resolved.spans[0].end), (6, 11));
    /// ```
    pub fn resolve(&self, raw: &str) -> InlineText {
        let chars: Vec<char> = raw.chars().collect();
        let mut out = Output::default();
        let mut i = 0;

        while i < chars.len() {
            let next = self
                .try_link(&chars, i, &mut out)
                .or_else(|| self.try_bold(&chars, i, &mut out))
                .or_else(|| self.try_italic(&chars, i, &mut out))
                .or_else(|| self.try_code(&chars, i, &mut out));

            match next {
                Some(next) => i = next,
                None => {
                    out.push(chars[i]);
                    i += 1;
                }
            }
        }

        out.finish()
    }

    /// `[label](url)`: the `(` must follow the first `]` directly, and the
    /// url runs to the first `)` after it.
    fn try_link(&self, chars: &[char], i: usize, out: &mut Output) -> Option<usize> {
        if chars[i] != '[' {
            return None;
        }
        let end = find_char(chars, i + 1, ']')?;
        if chars.get(end + 1) != Some(&'(') {
            return None;
        }
        let close = find_char(chars, end + 2, ')')?;

        let url: String = chars[end + 2..close].iter().collect();
        let style = StyleAttrs {
            font_style: Some("Regular".to_string()),
            font_family: Some(self.theme.body_font.clone()),
            fill_color: Some(self.theme.link_color),
            hyperlink: Some(url),
            ..Default::default()
        };
        out.push_styled(&chars[i + 1..end], style);
        Some(close + 1)
    }

    fn try_bold(&self, chars: &[char], i: usize, out: &mut Output) -> Option<usize> {
        if chars[i] != '*' || chars.get(i + 1) != Some(&'*') {
            return None;
        }
        let close = find_pair(chars, i + 2, '*')?;
        out.push_styled(&chars[i + 2..close], StyleAttrs::font_style("Bold"));
        Some(close + 2)
    }

    /// Runs only after bold failed, so an unclosed `**` reaches here and
    /// pairs its two stars into an empty italic span.
    fn try_italic(&self, chars: &[char], i: usize, out: &mut Output) -> Option<usize> {
        if chars[i] != '*' {
            return None;
        }
        let close = find_char(chars, i + 1, '*')?;
        out.push_styled(&chars[i + 1..close], StyleAttrs::font_style("Italic"));
        Some(close + 1)
    }

    fn try_code(&self, chars: &[char], i: usize, out: &mut Output) -> Option<usize> {
        if chars[i] != '`' {
            return None;
        }
        let close = find_char(chars, i + 1, '`')?;
        let style = StyleAttrs {
            code: Some(true),
            font_family: Some(self.theme.mono_font.clone()),
            ..Default::default()
        };
        out.push_styled(&chars[i + 1..close], style);
        Some(close + 1)
    }
}

/// Index of the first `target` at or after `from`.
fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == target)
        .map(|p| p + from)
}

/// Index of the first doubled `target` at or after `from`.
fn find_pair(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .get(from..)?
        .windows(2)
        .position(|w| w[0] == target && w[1] == target)
        .map(|p| p + from)
}

/// Resolve inline markup with the default theme.
pub fn resolve_inline(raw: &str) -> InlineText {
    InlineParser::new().resolve(raw)
}

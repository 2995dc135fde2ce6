//! Command-line interface for mdframe.

use clap::{Parser, ValueEnum};
use mdframe_core::FontName;
use mdframe_render::Point;
use std::path::PathBuf;

/// Markdown shown by `--sample`.
pub const SAMPLE_MARKDOWN: &str = "# Sample Title\n\n\
A paragraph with **bold**, *italic*, \n\
[link](https://example.com) and `code`.\n\n\
---\n\n\
> Blockquote here.\n\n\
## List\n\
- First item\n\
- Second item\n\n\
## Table\n\
| Name | Value |\n\
| --- | --- |\n\
| A | 1 |\n\
| B | 2 |\n";

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The parsed document model as JSON
    Document,
    /// The rendered node tree as JSON
    Tree,
    /// An indented one-line-per-node outline of the rendered tree
    Outline,
}

/// mdframe - Render Markdown into auto-layout frame trees for design tools.
///
/// Parses Markdown into a block/inline document model and renders it as a
/// tree of frames, text nodes and rectangles, printed as JSON.
#[derive(Parser, Debug)]
#[command(
    name = "mdframe",
    author = "mdframe Contributors",
    version,
    about = "Render Markdown into auto-layout frame trees for design tools",
    after_help = "Examples:\n  \
                  cat README.md | mdframe\n  \
                  mdframe --emit document notes.md\n  \
                  mdframe --sample --emit outline\n  \
                  mdframe --font Roboto:Regular --font Inter:Regular doc.md"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Render the built-in sample document instead of reading input
    #[arg(long = "sample", conflicts_with = "files")]
    pub sample: bool,

    /// What to print
    #[arg(long = "emit", value_enum, default_value = "tree")]
    pub emit: Emit,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// Restrict the fonts the host can load (FAMILY:STYLE, repeatable)
    #[arg(long = "font", value_name = "FAMILY:STYLE")]
    pub fonts: Vec<String>,

    /// Viewport centre the root frame is placed on: x,y
    #[arg(long = "viewport", value_name = "X,Y")]
    pub viewport: Option<String>,

    /// Print compact instead of pretty JSON
    #[arg(long = "compact")]
    pub compact: bool,
}

impl Cli {
    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty() && !self.sample
    }

    /// Parse the `--font` arguments. `None` means every font is available.
    pub fn parse_fonts(&self) -> Result<Option<Vec<FontName>>, String> {
        if self.fonts.is_empty() {
            return Ok(None);
        }

        self.fonts
            .iter()
            .map(|f| FontName::parse(f).ok_or_else(|| format!("invalid font \"{}\"", f)))
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
    }

    /// Parse the viewport centre; the origin when not given.
    pub fn parse_viewport(&self) -> Option<Point> {
        match &self.viewport {
            None => Some(Point::default()),
            Some(v) => {
                let (x, y) = v.split_once(',')?;
                Some(Point::new(x.trim().parse().ok()?, y.trim().parse().ok()?))
            }
        }
    }
}

/// Show paths information.
pub fn show_paths() {
    use mdframe_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["mdframe"]);
        assert!(cli.files.is_empty());
        assert_eq!(cli.emit, Emit::Tree);
        assert_eq!(cli.log_level, "warn");
        assert!(!cli.compact);
        assert!(cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_file() {
        let cli = Cli::parse_from(["mdframe", "test.md"]);
        assert_eq!(cli.files.len(), 1);
        assert_eq!(cli.files[0], PathBuf::from("test.md"));
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_cli_parse_with_options() {
        let cli = Cli::parse_from([
            "mdframe",
            "-l",
            "debug",
            "--emit",
            "document",
            "--compact",
            "-c",
            "[layout]\nTableWidth = 400.0",
            "file.md",
        ]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.emit, Emit::Document);
        assert!(cli.compact);
        assert!(cli.config.is_some());
    }

    #[test]
    fn test_sample_conflicts_with_files() {
        assert!(Cli::try_parse_from(["mdframe", "--sample", "file.md"]).is_err());

        let cli = Cli::parse_from(["mdframe", "--sample"]);
        assert!(!cli.should_read_stdin());
    }

    #[test]
    fn test_parse_fonts() {
        let cli = Cli::parse_from(["mdframe"]);
        assert_eq!(cli.parse_fonts(), Ok(None));

        let cli = Cli::parse_from(["mdframe", "--font", "Roboto:Bold", "--font", "Inter"]);
        assert_eq!(
            cli.parse_fonts(),
            Ok(Some(vec![
                FontName::new("Roboto", "Bold"),
                FontName::new("Inter", "Regular"),
            ]))
        );

        let cli = Cli::parse_from(["mdframe", "--font", ":Bold"]);
        assert!(cli.parse_fonts().is_err());
    }

    #[test]
    fn test_parse_viewport() {
        let cli = Cli::parse_from(["mdframe", "--viewport", "100, -50.5"]);
        assert_eq!(cli.parse_viewport(), Some(Point::new(100.0, -50.5)));

        let cli = Cli::parse_from(["mdframe"]);
        assert_eq!(cli.parse_viewport(), Some(Point::default()));

        let cli = Cli::parse_from(["mdframe", "--viewport", "nope"]);
        assert_eq!(cli.parse_viewport(), None);
    }

    #[test]
    fn test_sample_markdown_shape() {
        assert!(SAMPLE_MARKDOWN.starts_with("# Sample Title\n\n"));
        assert!(SAMPLE_MARKDOWN.contains("A paragraph with **bold**, *italic*, \n[link]"));
        assert!(SAMPLE_MARKDOWN.ends_with("| B | 2 |\n"));
    }
}

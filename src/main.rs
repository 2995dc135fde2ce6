//! mdframe - Render Markdown into auto-layout frame trees for design tools.
//!
//! This binary provides the CLI interface to the mdframe library: it reads
//! Markdown from files, stdin or the built-in sample, and prints the parsed
//! document or the rendered node tree.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Emit, SAMPLE_MARKDOWN};
use log::{debug, error, info, warn, LevelFilter};
use std::io::{self, Read, Write};

use mdframe_config::{ComputedTheme, Config};
use mdframe_core::{Document, MdframeError, Result};
use mdframe_parser::Parser as MarkdownParser;
use mdframe_render::{MemoryHost, RenderStyle, Renderer, VisualNode};
use serde::Serialize;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("mdframe v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("Error rendering markdown: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let theme = config.computed_theme();
    debug!("Loaded config with theme: {:?}", theme);

    let source = read_input(cli)?;
    let output = emit(cli, &theme, &source)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if !output.ends_with('\n') {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config file: {}", e);
        Config::default()
    });

    if let Some(ref config_arg) = cli.config {
        config.merge(&Config::parse_override(config_arg)?);
        debug!("Merged config override");
    }

    Ok(config)
}

/// Collect the Markdown source. Several files are joined with a blank line
/// and rendered as one document.
fn read_input(cli: &Cli) -> Result<String> {
    if cli.sample {
        info!("Using the sample document");
        return Ok(SAMPLE_MARKDOWN.to_string());
    }

    if cli.should_read_stdin() {
        info!("Reading from stdin");
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        return Ok(source);
    }

    let mut sources = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        info!("Processing file: {}", path.display());
        sources.push(std::fs::read_to_string(path)?);
    }
    Ok(join_sources(&sources))
}

fn join_sources(sources: &[String]) -> String {
    sources.join("\n\n")
}

/// Parse `source` and produce the requested output.
fn emit(cli: &Cli, theme: &ComputedTheme, source: &str) -> Result<String> {
    let parser = MarkdownParser::with_theme(theme.inline_theme());
    let doc = parser.parse_document(source);
    debug!("Parsed {} blocks, title {:?}", doc.blocks.len(), doc.title);

    match cli.emit {
        Emit::Document => to_json(&doc, cli.compact),
        Emit::Tree => to_json(&render_tree(cli, theme, &doc)?, cli.compact),
        Emit::Outline => Ok(render_tree(cli, theme, &doc)?.outline()),
    }
}

/// Render a document against an in-memory host configured from the CLI.
fn render_tree(cli: &Cli, theme: &ComputedTheme, doc: &Document) -> Result<VisualNode> {
    let viewport = cli.parse_viewport().ok_or_else(|| {
        MdframeError::Config(format!(
            "invalid viewport \"{}\", expected X,Y",
            cli.viewport.as_deref().unwrap_or_default()
        ))
    })?;
    let mut host = match cli.parse_fonts().map_err(MdframeError::Config)? {
        Some(fonts) => MemoryHost::with_fonts(fonts),
        None => MemoryHost::new(),
    }
    .with_viewport(viewport);

    let mut renderer = Renderer::with_style(RenderStyle::from_computed(theme));

    info!("Rendering markdown…");
    let root = renderer.render(doc, &mut host)?;
    for diagnostic in renderer.diagnostics() {
        warn!("{}", diagnostic);
    }
    info!("Markdown rendered");

    Ok(root)
}

fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    json.map_err(|e| MdframeError::Output(e.to_string()))
}

//! Argument parsing and input loading for the command-line front end.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use speedtable_render::{
    BorderStyle, OutputMode, RenderOptions, Renderer, StyleConfig, TableData, TypeLabels,
};

/// Render JSON or YAML table data as a styled, box-drawn table.
///
/// Table data is either {"columns": [...], "rows": [...]}, a list of
/// records, or a list of rows.
#[derive(Debug, Parser)]
#[command(name = "speedtable")]
#[command(version)]
pub struct Args {
    /// Table data file (.json, .yaml or .yml). Reads JSON from stdin if omitted.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Style file (.json, .yaml or .yml) with header, border, body,
    /// type_label, title_text and title_color keys.
    #[arg(short, long)]
    pub style_file: Option<PathBuf>,

    /// Positional styles: header, border, body, type_label, title_text, title_color.
    #[arg(num_args = 0..=6, value_name = "STYLE")]
    pub styles: Vec<String>,

    /// Box-drawing character set.
    #[arg(long, value_enum, default_value_t = BorderArg::Heavy)]
    pub border: BorderArg,

    /// Draw a separator line between data rows.
    #[arg(long)]
    pub row_lines: bool,

    /// When to annotate headers with their column type.
    #[arg(long, value_enum, default_value_t = TypeLabelArg::Auto)]
    pub type_labels: TypeLabelArg,

    /// Group digits in numeric columns with this character.
    #[arg(long, value_name = "SEP")]
    pub thousands: Option<char>,

    /// Disable ANSI styling.
    #[arg(long)]
    pub plain: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BorderArg {
    Heavy,
    Light,
    Double,
    Rounded,
    Ascii,
}

impl From<BorderArg> for BorderStyle {
    fn from(arg: BorderArg) -> Self {
        match arg {
            BorderArg::Heavy => BorderStyle::Heavy,
            BorderArg::Light => BorderStyle::Light,
            BorderArg::Double => BorderStyle::Double,
            BorderArg::Rounded => BorderStyle::Rounded,
            BorderArg::Ascii => BorderStyle::Ascii,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TypeLabelArg {
    Auto,
    Always,
    Never,
}

impl From<TypeLabelArg> for TypeLabels {
    fn from(arg: TypeLabelArg) -> Self {
        match arg {
            TypeLabelArg::Auto => TypeLabels::Auto,
            TypeLabelArg::Always => TypeLabels::Always,
            TypeLabelArg::Never => TypeLabels::Never,
        }
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "speedtable={level},speedtable_render={level}"
        ))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads input, resolves styles and renders the table.
pub fn run(args: &Args) -> Result<String> {
    let data = match &args.input {
        Some(path) => load_table(path)?,
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read table data from stdin")?;
            TableData::from_json(&input).context("invalid table data on stdin")?
        }
    };

    let styles = resolve_styles(args.style_file.as_deref(), &args.styles)?;
    let table = data.build()?;
    tracing::debug!(
        columns = table.columns().len(),
        rows = table.rows().len(),
        "loaded table"
    );

    let renderer = Renderer::new(render_options(args));
    Ok(renderer.render(&table, &styles)?)
}

/// Builds render options from the flags.
pub fn render_options(args: &Args) -> RenderOptions {
    let mut options = RenderOptions::new()
        .border(args.border.into())
        .row_separators(args.row_lines)
        .type_labels(args.type_labels.into());
    if let Some(sep) = args.thousands {
        options = options.thousands_separator(sep);
    }
    if args.plain {
        options = options.output_mode(OutputMode::Text);
    }
    options
}

/// Layers positional styles over the style file, if any.
pub fn resolve_styles(style_file: Option<&Path>, positional: &[String]) -> Result<StyleConfig> {
    let base = match style_file {
        Some(path) => {
            let content = read(path)?;
            let parsed = if is_yaml(path) {
                StyleConfig::from_yaml(&content)
            } else {
                StyleConfig::from_json(&content)
            };
            parsed.with_context(|| format!("invalid style file {}", path.display()))?
        }
        None => StyleConfig::default(),
    };
    let overrides = StyleConfig::from_positional(positional)?;
    Ok(base.merge(&overrides))
}

/// Reads a table description, choosing the format by extension.
pub fn load_table(path: &Path) -> Result<TableData> {
    let content = read(path)?;
    let data = if is_yaml(path) {
        TableData::from_yaml(&content)
    } else {
        TableData::from_json(&content)
    };
    data.with_context(|| format!("invalid table data in {}", path.display()))
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

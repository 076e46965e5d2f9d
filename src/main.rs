use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use pathtree::{Config, Format, Style, DEFAULT_INPUT, DEFAULT_OUTPUT};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
enum FormatArg {
    #[default]
    Outline,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Outline => Format::Outline,
            FormatArg::Json => Format::Json,
        }
    }
}

/// Sort a backslash-separated path listing into an indented outline.
///
/// Folders are listed first in name order, then files from largest to
/// smallest.
#[derive(Parser, Debug)]
#[command(name = "pathtree", version)]
struct Args {
    /// Path listing to read.
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    /// Where to write the sorted outline.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Spaces per nesting level.
    #[arg(long, default_value_t = 2, conflicts_with = "tabs")]
    indent: usize,

    /// Indent with tabs instead of spaces.
    #[arg(long)]
    tabs: bool,

    /// Output file format.
    #[arg(long, value_enum, default_value_t)]
    format: FormatArg,

    /// Log more, repeat for debug output. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            input: args.input,
            output: args.output,
            style: if args.tabs {
                Style::Tabs
            } else {
                Style::Spaces(args.indent)
            },
            format: args.format.into(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from(args);
    pathtree::run(&config).with_context(|| {
        format!(
            "could not sort {} into {}",
            config.input.display(),
            config.output.display()
        )
    })
}

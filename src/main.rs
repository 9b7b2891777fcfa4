//! refdoc — dump the class/member model of an API reflection document.
//!
//! `refdoc build/structure.xml` prints every class, interface and trait with
//! its own and inherited members. `-f json` switches to JSON, `-o` writes
//! to a file, `-m` keeps only types whose full name matches a regex.

use anyhow::{Context, Result};
use clap::Parser;
use refdoc::render;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "refdoc",
    about = "Extract classes, interfaces and traits from an API reflection XML document"
)]
struct Cli {
    /// Reflection document (e.g. structure.xml)
    file: PathBuf,

    /// Output format: dump (default), json
    #[arg(short = 'f', long, default_value = "dump")]
    format: String,

    /// Write to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Only keep types whose fully-qualified name matches this regex
    #[arg(short = 'm', long = "match")]
    pattern: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Resolved settings for [`run`].
struct RunConfig {
    input: PathBuf,
    format: String,
    output: Option<PathBuf>,
    pattern: Option<Regex>,
}

impl RunConfig {
    fn from_cli(cli: Cli) -> Result<RunConfig> {
        let pattern = cli
            .pattern
            .as_deref()
            .map(Regex::new)
            .transpose()
            .context("invalid --match pattern")?;
        Ok(RunConfig {
            input: cli.file,
            format: cli.format,
            output: cli.output,
            pattern,
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    run(&RunConfig::from_cli(cli)?)
}

/// Load, extract, filter, render and write.
fn run(config: &RunConfig) -> Result<()> {
    // resolve the format before touching the input
    let renderer = render::create_renderer(&config.format)?;

    let document = refdoc::load(&config.input)
        .with_context(|| format!("failed to load {}", config.input.display()))?;
    let mut catalog = refdoc::collect(&document);

    if let Some(ref pattern) = config.pattern {
        catalog.retain(|name, _| pattern.is_match(name));
    }

    let output = renderer.render(&catalog)?;
    match config.output {
        Some(ref path) => {
            let path = if path.is_dir() {
                path.join(format!(
                    "{}.{}",
                    derive_output_name(&config.input),
                    renderer.file_extension()
                ))
            } else {
                path.clone()
            };
            fs::write(&path, &output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => print!("{}", output),
    }
    Ok(())
}

/// Output file stem for a directory target: "build/structure.xml" → "structure".
fn derive_output_name(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_else(|| "catalog".to_string())
}

//! resource-extractor CLI
//!
//! Extract strings, images and binary blobs from .resources containers.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use resource_extractor::{list, Event, EventSink, ExtractConfig, ExtractError, Extractor, Severity};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const CONTAINER_EXTENSION: &str = "resources";

#[derive(Parser, Debug)]
#[command(name = "resource-extractor")]
#[command(version)]
#[command(about = "Resource extraction utility")]
struct Cli {
    /// .resources file to extract, or a directory to search for them
    input: PathBuf,

    /// Directory to create the output directories in
    #[arg(short = 'C', long, default_value = ".")]
    directory: PathBuf,

    /// List entries and their kinds instead of extracting
    #[arg(short = 't', long)]
    list: bool,

    /// Do not write text found in binary resources
    #[arg(long)]
    no_hidden_text: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Prints events to stdout, colored by severity
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: Event) {
        let mut line = format!("[{}] [R-Extractor] ", event.timestamp.format("%H:%M:%S"));
        if let Some(glyph) = event.severity.glyph() {
            line.push_str(glyph);
            line.push(' ');
        }
        line.push_str(&event.message);

        let styled = match event.severity {
            Severity::Info => style(line).cyan(),
            Severity::Success => style(line).green(),
            Severity::Warning => style(line).yellow(),
            Severity::Error => style(line).red(),
        };
        println!("{}", styled);
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<ExtractError>() {
            // Already reported through the event sink
            Some(extract_err) => ExitCode::from(extract_err.exit_code()),
            None => {
                ConsoleSink.emit(Event::error(format!("{:#}", err)));
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.exists() {
        let err = ExtractError::InputNotFound(cli.input.clone());
        ConsoleSink.emit(Event::error(err.to_string()));
        ConsoleSink.emit(Event::warning("Usage: resource-extractor <Resources.resources>"));
        return Err(err.into());
    }

    let inputs = collect_inputs(&cli.input)?;
    if inputs.is_empty() {
        ConsoleSink.emit(Event::warning(format!(
            "No .{} files found in {}",
            CONTAINER_EXTENSION,
            cli.input.display()
        )));
        return Ok(());
    }

    if cli.list {
        return list_containers(&inputs, cli.verbose);
    }

    let config = ExtractConfig::default()
        .with_output_root(&cli.directory)
        .with_hidden_text(!cli.no_hidden_text);
    let mut extractor = Extractor::new(config, ConsoleSink);

    for input in &inputs {
        extractor.run(input)?;
    }

    Ok(())
}

/// A single file, or every container found under a directory
fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut found = Vec::new();
    for entry in walkdir::WalkDir::new(input).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk: {}", input.display()))?;
        let is_container = entry.file_type().is_file()
            && entry.path().extension().is_some_and(|ext| ext == CONTAINER_EXTENSION);
        if is_container {
            found.push(entry.into_path());
        }
    }
    Ok(found)
}

fn list_containers(inputs: &[PathBuf], verbose: bool) -> Result<()> {
    for input in inputs {
        let entries = list(input).with_context(|| format!("Failed to read: {}", input.display()))?;

        if inputs.len() > 1 {
            println!("{}:", input.display());
        }
        for (key, kind) in &entries {
            if verbose {
                println!("{}  {}", key, kind);
            } else {
                println!("{}", key);
            }
        }
    }
    Ok(())
}

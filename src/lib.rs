pub mod cli;
pub mod error;
pub mod model;
pub mod parser;
pub mod po;
pub mod processor;
pub mod writer;

use std::path::Path;

use anyhow::Context;
use clap::Parser;

pub use error::{GenError, Result};
pub use model::Definitions;
pub use writer::file::WriteOutcome;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let definitions = args.definitions_path();
    log::info!("Using definitions from {}", definitions.display());

    generate(
        &definitions,
        &args.public_header,
        &args.internal_header,
        &cli::program_name(),
    )?;
    Ok(())
}

/// Regenerate both headers from `definitions`, printing one status line per
/// file. Nothing is written unless the whole document validates.
pub fn generate(
    definitions: &Path,
    public_header: &Path,
    internal_header: &Path,
    generator: &str,
) -> anyhow::Result<(WriteOutcome, WriteOutcome)> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let doc = parser::load(definitions)
        .with_context(|| format!("Reading {}", definitions.display()))?;

    // 2. ── Validate ───────────────────────────────────────────────────
    let defs = processor::build(&doc).with_context(|| "Validating brush definitions")?;

    // 3. ── Emit ───────────────────────────────────────────────────────
    let source_name = definitions
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli::DEFINITIONS_FILE.to_string());

    let public = writer::c::header_guarded(
        &public_header.to_string_lossy(),
        &writer::c::generate_public_settings_code(&defs),
    );
    let internal = writer::c::header_guarded(
        &internal_header.to_string_lossy(),
        &writer::c::generate_internal_settings_code(&defs, &source_name),
    );

    // 4. ── Write outputs ──────────────────────────────────────────────
    let public = write_reported(public_header, &public, generator)?;
    let internal = write_reported(internal_header, &internal, generator)?;
    Ok((public, internal))
}

fn write_reported(path: &Path, content: &str, generator: &str) -> anyhow::Result<WriteOutcome> {
    let outcome = writer::file::write_if_changed(path, content, generator)
        .with_context(|| format!("Writing {}", path.display()))?;
    println!("{}", writer::file::Report { path, outcome });
    Ok(outcome)
}

//! Turn the location notes left by the header generator into proper `.po`
//! location comments.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;

use brushgen::po;

#[derive(Parser, Debug)]
#[command(name = "fix-po-location", version, about)]
struct Args {
    /// Catalog produced by xgettext
    input: PathBuf,
    /// Where to write the fixed catalog
    output: PathBuf,
    /// Definitions file name the location notes refer to
    #[arg(long, default_value = po::DEFAULT_SOURCE_NAME)]
    source_name: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            eprintln!("usage: fix-po-location <input> <output>");
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let po_in = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Reading {}", args.input.display()))?;
    let fixed = po::fix_locations(&po_in, &args.source_name)
        .with_context(|| format!("Building location pattern for {}", args.source_name))?;
    std::fs::write(&args.output, fixed)
        .with_context(|| format!("Writing {}", args.output.display()))?;
    Ok(())
}

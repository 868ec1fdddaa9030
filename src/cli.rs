use clap::Parser;
use std::path::{Path, PathBuf};

/// File name of the canonical brush definitions document.
pub const DEFINITIONS_FILE: &str = "brushsettings.json";

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Public header to generate (input, setting and state enums)
    pub public_header: PathBuf,
    /// Internal header to generate (static setting and input info arrays)
    pub internal_header: PathBuf,
    /// Brush definitions document [default: brushsettings.json next to the
    /// executable, else in the crate directory]
    #[arg(long, env = "BRUSHGEN_DEFINITIONS")]
    pub definitions: Option<PathBuf>,
}

impl Cli {
    pub fn definitions_path(&self) -> PathBuf {
        match &self.definitions {
            Some(path) => path.clone(),
            None => default_definitions(),
        }
    }
}

/// The definitions document that ships alongside the generator.
pub fn default_definitions() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFINITIONS_FILE)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFINITIONS_FILE))
}

/// Name of the running program, for the "autogenerated by" banner.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

//! `tokencss normalize`: print a token file with canonical keys.

use std::path::PathBuf;

use clap::Args;
use tokencss_core::read_source;
use tracing::debug;

use super::exit_code;

/// Arguments of `tokencss normalize`.
#[derive(Args, Debug, Clone)]
pub struct NormalizeArgs {
    /// Token JSON file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

/// Run `tokencss normalize`: print the file with canonical keys.
pub fn run(args: &NormalizeArgs) -> i32 {
    exit_code(normalized(args).map(|json| println!("{json}")))
}

fn normalized(args: &NormalizeArgs) -> Result<String, String> {
    debug!(file = %args.file.display(), "Normalizing token file.");
    let document = read_source(&args.file).map_err(|err| err.to_string())?;
    serde_json::to_string_pretty(&document)
        .map_err(|err| format!("Failed to serialize normalized tokens: {err}"))
}

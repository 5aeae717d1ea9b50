//! `tokencss name`: print the CSS identifier for a token path.

use clap::Args;
use tokencss_core::format_name;

/// Arguments of `tokencss name`.
#[derive(Args, Debug, Clone)]
pub struct NameArgs {
    /// Path segments from the root, e.g. `color brand primary`
    #[arg(value_name = "SEGMENT", required = true)]
    pub segments: Vec<String>,
}

/// Run `tokencss name`: print the identifier for the path.
pub fn run(args: &NameArgs) -> i32 {
    println!("{}", format_name(&args.segments));
    0
}

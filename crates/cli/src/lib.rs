//! Command-line interface for tokencss.
//!
//! `run_cli` parses arguments, dispatches to a command and returns the
//! process exit code.

use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

pub mod commands;

/// Environment variable controlling log output.
pub const LOG_ENV: &str = "TOKENCSS_LOG";

const LOG_TARGETS: [&str; 2] = ["tokencss_core", "tokencss_cli"];

#[derive(Parser, Debug)]
#[command(
    name = "tokencss",
    version,
    about = "Compile design tokens into a CSS stylesheet"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the stylesheet from token sources
    Build(commands::build::BuildArgs),
    /// Print a token file with canonical `$type`/`$value` keys
    Normalize(commands::normalize::NormalizeArgs),
    /// Print the CSS identifier for a token path
    Name(commands::name::NameArgs),
}

/// Run the CLI with `args` (including the program name) and return the exit code.
pub fn run_cli<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => match cli.command {
            Some(Commands::Build(args)) => commands::build::run(&args),
            Some(Commands::Normalize(args)) => commands::normalize::run(&args),
            Some(Commands::Name(args)) => commands::name::run(&args),
            None => {
                let mut cmd = Cli::command();
                let _ = cmd.print_help();
                println!();
                0
            }
        },
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Install the stderr log subscriber.
///
/// `TOKENCSS_LOG` takes a plain level ("debug") applied to the tokencss
/// crates, or a full filter spec like "tokencss_core=trace".
pub fn init_tracing() {
    let filter = match std::env::var(LOG_ENV) {
        Ok(level) if is_plain_level(&level) => scoped_filter(&level),
        Ok(spec) => spec,
        Err(_) => scoped_filter("info"),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(EnvFilter::new(filter));

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn scoped_filter(level: &str) -> String {
    LOG_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}

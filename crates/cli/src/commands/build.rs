//! `tokencss build`: compile configured token sources into a stylesheet.

use std::path::{Path, PathBuf};

use clap::Args;
use tokencss_core::{BuildReport, Config};
use tracing::debug;

use super::exit_code;

/// Arguments of `tokencss build`.
#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Config file (defaults to ./tokencss.toml when present)
    #[arg(long, short = 'c', value_name = "CONFIG")]
    pub config: Option<PathBuf>,
    /// Token file or directory; repeatable, replaces the configured sources
    #[arg(long = "source", short = 's', value_name = "PATH")]
    pub sources: Vec<PathBuf>,
    /// Output stylesheet path, overriding build_path/destination
    #[arg(long, short = 'o', value_name = "FILE")]
    pub out: Option<PathBuf>,
    /// Selector of the custom-property block
    #[arg(long, value_name = "SELECTOR")]
    pub selector: Option<String>,
}

/// Run `tokencss build`.
pub fn run(args: &BuildArgs) -> i32 {
    exit_code(build(args).map(|report| {
        println!("{}", report.output.display());
    }))
}

fn build(args: &BuildArgs) -> Result<BuildReport, String> {
    let cwd = std::env::current_dir()
        .map_err(|err| format!("Failed to determine working directory: {err}"))?;
    let config = resolve_config(args, &cwd).map_err(|err| err.to_string())?;
    tokencss_core::build(&config).map_err(|err| err.to_string())
}

/// Load the config and apply command-line overrides. Override paths are
/// relative to `cwd`, not to the config file.
pub fn resolve_config(args: &BuildArgs, cwd: &Path) -> tokencss_core::Result<Config> {
    let mut config = Config::discover(args.config.as_deref(), cwd)?;

    if !args.sources.is_empty() {
        config.source = args.sources.iter().map(|p| cwd.join(p)).collect();
    }
    if let Some(out) = &args.out {
        let out = cwd.join(out);
        if let Some(file_name) = out.file_name() {
            config.css.destination = PathBuf::from(file_name);
        }
        config.css.build_path = out.parent().map(Path::to_path_buf).unwrap_or_default();
    }
    if let Some(selector) = &args.selector {
        config.css.selector.clone_from(selector);
    }

    debug!(
        sources = ?config.source,
        output = %config.output_path().display(),
        selector = %config.css.selector,
        "Resolved build configuration."
    );
    Ok(config)
}

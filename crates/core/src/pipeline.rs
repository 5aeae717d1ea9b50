//! Build pipeline: sources -> merged token tree -> stylesheet file.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::css::{Emit, build_stylesheet};
use crate::error::{Error, Result};
use crate::tokens::{TokenTree, merge_trees, normalize};

/// Summary of a completed build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Path of the written stylesheet.
    pub output: PathBuf,
    /// Token files read, in merge order.
    pub sources: Vec<PathBuf>,
    /// Custom properties in the root block.
    pub variables: usize,
    /// Generated typography classes.
    pub classes: usize,
}

/// Read and normalize one token source.
///
/// Malformed JSON aborts with [`Error::Parse`]; there is no partial recovery.
pub fn read_source(path: &Path) -> Result<Value> {
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: Value = serde_json::from_str(&contents).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "Parsed token source.");
    Ok(normalize(&parsed))
}

/// Build the stylesheet described by `config` and write it to disk.
pub fn build(config: &Config) -> Result<BuildReport> {
    let sources = config.source_files()?;
    if sources.is_empty() {
        return Err(Error::NoSources);
    }

    let mut document = Value::Object(Map::new());
    for path in &sources {
        let source = read_source(path)?;
        if !source.is_object() {
            warn!(path = %path.display(), "Token source is not a JSON object; skipping it.");
            continue;
        }
        merge_trees(&mut document, source);
    }

    let tree = TokenTree::from_value(&document);
    let stylesheet = build_stylesheet(&tree, &config.format_options());
    let css = stylesheet.emit();

    let output = config.output_path();
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&output, &css).map_err(|source| Error::Io {
        path: output.clone(),
        source,
    })?;

    let report = BuildReport {
        output,
        sources,
        variables: stylesheet.root.declarations.len(),
        classes: stylesheet.classes.len(),
    };
    info!(
        output = %report.output.display(),
        sources = report.sources.len(),
        variables = report.variables,
        classes = report.classes,
        "Stylesheet written."
    );
    Ok(report)
}

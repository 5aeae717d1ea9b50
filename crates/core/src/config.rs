//! Build configuration (`tokencss.toml`).
//!
//! ```toml
//! source = ["tokens/design-tokens.tokens.json"]
//!
//! [css]
//! build_path = "build/css/"
//! destination = "tokens.css"
//! selector = ":root"
//! ```
//!
//! Relative paths resolve against the directory holding the config file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::css::{FormatOptions, ROOT_SELECTOR};
use crate::error::{Error, Result};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tokencss.toml";

const DEFAULT_SOURCE: &str = "tokens/design-tokens.tokens.json";
const DEFAULT_BUILD_PATH: &str = "build/css/";
const DEFAULT_DESTINATION: &str = "tokens.css";
const TOKEN_FILE_EXTENSION: &str = "json";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Token source files or directories, merged in order.
    pub source: Vec<PathBuf>,
    /// Stylesheet output settings.
    pub css: CssConfig,
    /// Directory relative paths resolve against.
    #[serde(skip)]
    pub root: PathBuf,
}

/// Stylesheet output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CssConfig {
    /// Output directory.
    pub build_path: PathBuf,
    /// Output file name inside `build_path`.
    pub destination: PathBuf,
    /// Selector of the custom-property block.
    pub selector: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: vec![PathBuf::from(DEFAULT_SOURCE)],
            css: CssConfig::default(),
            root: PathBuf::new(),
        }
    }
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            build_path: PathBuf::from(DEFAULT_BUILD_PATH),
            destination: PathBuf::from(DEFAULT_DESTINATION),
            selector: ROOT_SELECTOR.to_string(),
        }
    }
}

impl Config {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self::parse(&contents, root).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config text; relative paths will resolve against `root`.
    pub fn parse(contents: &str, root: PathBuf) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(contents)?;
        config.root = root;
        Ok(config)
    }

    /// Load `path` if given, else `tokencss.toml` in `dir` if present, else defaults rooted at `dir`.
    pub fn discover(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = dir.join(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            return Self::load(&default_path);
        }
        debug!(dir = %dir.display(), "No config file found; using defaults.");
        Ok(Self {
            root: dir.to_path_buf(),
            ..Self::default()
        })
    }

    /// Resolve a configured path against the config directory.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }

    /// Path of the generated stylesheet.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.css.build_path).join(&self.css.destination)
    }

    /// Formatting options derived from the `[css]` table.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            selector: self.css.selector.clone(),
        }
    }

    /// Expand configured sources into token files, in order.
    ///
    /// Directories are walked recursively for `*.json` files, sorted by path.
    pub fn source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for source in &self.source {
            let path = self.resolve(source);
            if path.is_dir() {
                files.extend(json_files_in(&path)?);
            } else if path.is_file() {
                files.push(path);
            } else {
                return Err(Error::MissingSource { path });
            }
        }
        Ok(files)
    }
}

fn json_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|err| Error::Io {
            path: dir.to_path_buf(),
            source: err.into(),
        })?;
        let path = entry.path();
        if entry.file_type().is_file()
            && path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(TOKEN_FILE_EXTENSION))
        {
            files.push(path.to_path_buf());
        }
    }
    debug!(dir = %dir.display(), count = files.len(), "Collected token files.");
    Ok(files)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.source, vec![PathBuf::from("tokens/design-tokens.tokens.json")]);
        assert_eq!(config.output_path(), PathBuf::from("build/css/tokens.css"));
        assert_eq!(config.format_options(), FormatOptions::default());
    }

    #[test]
    fn test_parse_full() {
        let config = Config::parse(
            r#"
source = ["a.json", "more"]

[css]
build_path = "dist"
destination = "vars.css"
selector = ".theme"
"#,
            PathBuf::from("/project"),
        )
        .unwrap();
        assert_eq!(config.source, vec![PathBuf::from("a.json"), PathBuf::from("more")]);
        assert_eq!(config.output_path(), PathBuf::from("/project/dist/vars.css"));
        assert_eq!(config.format_options().selector, ".theme");
    }

    #[test]
    fn test_parse_partial_uses_defaults() {
        let config = Config::parse("[css]\ndestination = \"x.css\"\n", PathBuf::new()).unwrap();
        assert_eq!(config.source, Config::default().source);
        assert_eq!(config.css.build_path, PathBuf::from("build/css/"));
        assert_eq!(config.css.selector, ":root");
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Config::parse("platforms = 1\n", PathBuf::new()).is_err());
        assert!(Config::parse("source = 3\n", PathBuf::new()).is_err());
    }

    #[test]
    fn test_load_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokencss.toml");
        fs::write(&path, "source = [\"tokens.json\"]\n").unwrap();
        fs::write(dir.path().join("tokens.json"), "{}").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.source_files().unwrap(), vec![dir.path().join("tokens.json")]);
        assert_eq!(config.output_path(), dir.path().join("build/css/").join("tokens.css"));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokencss.toml");
        fs::write(&path, "source = [").unwrap();
        assert!(matches!(Config::load(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn test_discover() {
        let dir = TempDir::new().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.root, dir.path());
        assert_eq!(config.source, Config::default().source);

        fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "source = [\"x\"]\n").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.source, vec![PathBuf::from("x")]);
    }

    #[test]
    fn test_source_directories_walked_in_order() {
        let dir = TempDir::new().unwrap();
        let tokens = dir.path().join("tokens");
        fs::create_dir_all(tokens.join("nested")).unwrap();
        fs::write(tokens.join("b.json"), "{}").unwrap();
        fs::write(tokens.join("a.json"), "{}").unwrap();
        fs::write(tokens.join("notes.md"), "").unwrap();
        fs::write(tokens.join("nested").join("c.JSON"), "{}").unwrap();

        let config = Config {
            source: vec![PathBuf::from("tokens")],
            root: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert_eq!(
            config.source_files().unwrap(),
            vec![
                tokens.join("a.json"),
                tokens.join("b.json"),
                tokens.join("nested").join("c.JSON"),
            ]
        );
    }

    #[test]
    fn test_missing_source() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            source: vec![PathBuf::from("nope.json")],
            root: dir.path().to_path_buf(),
            ..Config::default()
        };
        assert!(matches!(
            config.source_files(),
            Err(Error::MissingSource { path }) if path == dir.path().join("nope.json")
        ));
    }
}

use std::path::PathBuf;

/// Errors raised while loading configuration or building a stylesheet.
///
/// The token transformation itself never fails; only IO, malformed source
/// documents and malformed configuration abort a build.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file or directory could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// A token source is not valid JSON.
    #[error("failed to parse token file {}: {source}", .path.display())]
    Parse {
        /// Token source file.
        path: PathBuf,
        /// JSON syntax error.
        source: serde_json::Error,
    },

    /// The configuration file is not valid TOML or has the wrong shape.
    #[error("invalid config file {}: {source}", .path.display())]
    Config {
        /// Configuration file.
        path: PathBuf,
        /// TOML deserialization error.
        source: toml::de::Error,
    },

    /// A configured source path does not exist.
    #[error("token source not found: {}", .path.display())]
    MissingSource {
        /// The configured path, resolved against the config directory.
        path: PathBuf,
    },

    /// No token files were found in any configured source.
    #[error("no token source files found")]
    NoSources,
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

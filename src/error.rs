//! Error types for colony runs, instance loading and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type AcoResult<T> = Result<T, AcoError>;

/// Everything that can go wrong while loading or solving an instance.
///
/// I/O, parse and configuration errors are local to one problem instance.
/// [`AcoError::Domain`] and [`AcoError::Construction`] abort the run of the
/// instance that raised them.
#[derive(Debug, Error)]
pub enum AcoError {
    /// A file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Malformed instance or run configuration content.
    #[error("parse error in {}{}: {cause}", .file.display(), .line.map(|l| format!(" (line {l})")).unwrap_or_default())]
    Parse {
        /// File (or logical name) being parsed.
        file: PathBuf,
        /// 1-based line number, when known.
        line: Option<usize>,
        /// What was wrong.
        cause: String,
    },

    /// An algorithm parameter is out of range.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The instance is degenerate (e.g. two cities at zero distance).
    #[error("degenerate instance: {0}")]
    Domain(String),

    /// Roulette-wheel selection found no city with positive weight.
    #[error("tour construction stalled at step {step}: no selectable city from city {city}")]
    Construction {
        /// Construction step (1-based, the start city is step 0).
        step: usize,
        /// City the ant was standing on.
        city: usize,
    },

    /// YAML run configuration could not be deserialized.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON report could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AcoError {
    /// Wraps an I/O error together with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a parse error.
    pub fn parse(file: impl Into<PathBuf>, line: Option<usize>, cause: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            line,
            cause: cause.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_with_line() {
        let err = AcoError::parse("data/a.txt", Some(3), "bad token");
        assert_eq!(err.to_string(), "parse error in data/a.txt (line 3): bad token");
    }

    #[test]
    fn test_parse_display_without_line() {
        let err = AcoError::parse("conf.ini", None, "missing count");
        assert_eq!(err.to_string(), "parse error in conf.ini: missing count");
    }

    #[test]
    fn test_construction_display() {
        let err = AcoError::Construction { step: 4, city: 2 };
        assert!(err.to_string().contains("step 4"));
        assert!(err.to_string().contains("city 2"));
    }

    #[test]
    fn test_io_has_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AcoError::io("missing.txt", io);
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("cannot read missing.txt"));
    }
}

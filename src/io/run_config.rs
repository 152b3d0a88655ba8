//! Run configuration: which instances to solve and for how long.
//!
//! Two layouts are accepted. A plain file lists `<instance> <iterations>`
//! pairs separated by whitespace, with `#` starting a comment:
//!
//! ```text
//! data/square.txt 200
//! data/berlin52.txt 1000
//! ```
//!
//! A YAML file (`.yaml` / `.yml`) lists the same pairs and may override
//! the algorithm parameters:
//!
//! ```yaml
//! parameters:
//!   num_ants: 20
//!   rho: 0.3
//! instances:
//!   - file: data/square.txt
//!     iterations: 200
//! ```
//!
//! Relative instance paths resolve against the configuration file's
//! directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::colony::AcoConfig;
use crate::error::{AcoError, AcoResult};

use super::instance::InstanceFormat;

/// One instance to solve.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RunEntry {
    /// Instance file.
    pub file: PathBuf,
    /// Number of generations to run.
    pub iterations: usize,
}

/// A batch of instances plus the parameters to solve them with.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RunConfig {
    /// Instances in processing order.
    #[serde(rename = "instances")]
    pub entries: Vec<RunEntry>,
    /// Algorithm parameters shared by every entry.
    #[serde(default)]
    pub parameters: AcoConfig,
    /// How instance files are read.
    #[serde(default)]
    pub format: InstanceFormat,
}

impl RunConfig {
    /// Loads a configuration file, picking the layout by extension.
    pub fn load(path: &Path) -> AcoResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| AcoError::io(path, e))?;
        let mut config = if is_yaml(path) {
            Self::from_yaml(&text)?
        } else {
            Self::from_plain(&text, path)?
        };
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }
        Ok(config)
    }

    /// Parses `<instance> <iterations>` pairs with default parameters.
    pub fn from_plain(text: &str, path: &Path) -> AcoResult<Self> {
        let mut tokens = text
            .lines()
            .enumerate()
            .flat_map(|(i, line)| {
                let content = line.split('#').next().unwrap_or("");
                content.split_whitespace().map(move |t| (i + 1, t))
            });

        let mut entries = Vec::new();
        while let Some((line, file)) = tokens.next() {
            let (count_line, count) = tokens.next().ok_or_else(|| {
                AcoError::parse(path, Some(line), format!("missing iteration count for {file}"))
            })?;
            let iterations = count.parse().map_err(|_| {
                AcoError::parse(path, Some(count_line), format!("invalid iteration count: {count}"))
            })?;
            entries.push(RunEntry {
                file: PathBuf::from(file),
                iterations,
            });
        }

        Ok(Self {
            entries,
            ..Self::default()
        })
    }

    /// Parses the YAML layout.
    pub fn from_yaml(text: &str) -> AcoResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Prefixes every relative instance path with `base`.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for entry in &mut self.entries {
            if entry.file.is_relative() {
                entry.file = base.join(&entry.file);
            }
        }
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pairs() {
        let text = "a.txt 100\nb.txt 250\n\n";
        let config = RunConfig::from_plain(text, Path::new("conf.ini")).expect("valid");
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].file, PathBuf::from("a.txt"));
        assert_eq!(config.entries[1].iterations, 250);
        assert_eq!(config.parameters, AcoConfig::default());
        assert_eq!(config.format, InstanceFormat::Auto);
    }

    #[test]
    fn test_plain_comments_and_layout() {
        let text = "# batch\na.txt\n100 b.txt 5 # trailing\n";
        let config = RunConfig::from_plain(text, Path::new("conf.ini")).expect("valid");
        assert_eq!(config.entries.len(), 2);
        assert_eq!(config.entries[0].iterations, 100);
        assert_eq!(config.entries[1].file, PathBuf::from("b.txt"));
    }

    #[test]
    fn test_plain_missing_count() {
        let err = RunConfig::from_plain("a.txt 10\nb.txt\n", Path::new("conf.ini")).unwrap_err();
        assert!(matches!(err, AcoError::Parse { line: Some(2), .. }));
    }

    #[test]
    fn test_plain_bad_count() {
        let err = RunConfig::from_plain("a.txt ten\n", Path::new("conf.ini")).unwrap_err();
        assert!(err.to_string().contains("invalid iteration count"));
    }

    #[test]
    fn test_plain_empty() {
        let config = RunConfig::from_plain("", Path::new("conf.ini")).expect("valid");
        assert!(config.entries.is_empty());
    }

    #[test]
    fn test_yaml() {
        let text = r#"
parameters:
  num_ants: 20
  rho: 0.3
  seed: 7
format: matrix
instances:
  - file: a.txt
    iterations: 50
"#;
        let config = RunConfig::from_yaml(text).expect("valid");
        assert_eq!(config.entries, vec![RunEntry { file: "a.txt".into(), iterations: 50 }]);
        assert_eq!(config.parameters.num_ants, 20);
        assert_eq!(config.parameters.rho, 0.3);
        assert_eq!(config.parameters.seed, Some(7));
        // Unlisted parameters keep their defaults.
        assert_eq!(config.parameters.beta, 2.0);
        assert_eq!(config.format, InstanceFormat::Matrix);
    }

    #[test]
    fn test_yaml_invalid() {
        let err = RunConfig::from_yaml("instances: 3").unwrap_err();
        assert!(matches!(err, AcoError::Yaml(_)));
    }

    #[test]
    fn test_resolve_relative() {
        let mut config = RunConfig::from_plain("a.txt 1 /abs/b.txt 2", Path::new("c")).expect("valid");
        config.resolve_relative_to(Path::new("runs"));
        assert_eq!(config.entries[0].file, PathBuf::from("runs/a.txt"));
        assert_eq!(config.entries[1].file, PathBuf::from("/abs/b.txt"));
    }
}

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid exclude pattern {pattern:?}: {source}")]
    InvalidExcludePattern {
        pattern: String,
        source: glob::PatternError,
    },
}

/// Settings for converting a whole wiki. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Page title used when an article has no title of its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_url_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article_url_prefix: Option<String>,
    /// Directory holding the markdown articles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wiki_path: Option<PathBuf>,
    /// Where converted pages go; defaults to next to their sources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Glob patterns, relative to the wiki directory, of articles to skip.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the configured directories
        config.wiki_path = config
            .wiki_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));
        config.output_path = config
            .output_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        config.excludes()?;

        Ok(Some(config))
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/biobasics-wiki");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Compiles the `exclude` globs.
    pub fn excludes(&self) -> Result<Excludes, ConfigError> {
        self.exclude
            .iter()
            .map(|pattern| {
                glob::Pattern::new(pattern).map_err(|source| ConfigError::InvalidExcludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Excludes)
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

/// Compiled exclude patterns.
#[derive(Debug, Clone, Default)]
pub struct Excludes(Vec<glob::Pattern>);

impl Excludes {
    /// Whether a wiki-relative path matches any pattern.
    pub fn matches(&self, relative_path: &Path) -> bool {
        self.0.iter().any(|p| p.matches_path(relative_path))
    }
}

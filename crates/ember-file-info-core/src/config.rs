use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FileInfoError, Result};
use crate::file_info::SingularizeConfig;

const CONFIG_FILE: &str = "config.toml";

/// Default config template with rich comments
const DEFAULT_CONFIG_TEMPLATE: &str = r#"# ember-file-info configuration file
# Location: ~/.ember-file-info/config.toml

[output]
# Output format for `ember-file-info classify`: "text" or "json"
# Default: "text"
format = "text"

# Group classified files by container name (e.g. "route:foo.bar")
# Default: false
group = false

[singularize]
# Extra words that have no distinct singular form
# Default: []
# Example: uncountable = ["pods", "data"]
uncountable = []

# Extra irregular plurals (directory name -> singular type name)
# These take precedence over the builtin rules.
# Example: [singularize.irregular]
#          cacti = "cactus"
[singularize.irregular]
"#;

/// Global configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub singularize: SingularizeConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Group files by container name
    #[serde(default)]
    pub group: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = FileInfoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(FileInfoError::InvalidOutputFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Config {
    /// Load config from base directory
    pub fn load(base_dir: &Path) -> Result<Self> {
        let path = base_dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&content).map_err(|e| FileInfoError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to base directory
    pub fn save(&self, base_dir: &Path) -> Result<()> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        let content = toml::to_string_pretty(self).map_err(|e| FileInfoError::ConfigParse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        fs::write(&path, content)?;
        Ok(())
    }

    /// Get config file path
    pub fn path(base_dir: &Path) -> PathBuf {
        base_dir.join(CONFIG_FILE)
    }

    /// Initialize config with default template (rich comments)
    pub fn init(base_dir: &Path) -> Result<PathBuf> {
        let path = base_dir.join(CONFIG_FILE);
        fs::create_dir_all(base_dir)?;

        if !path.exists() {
            fs::write(&path, DEFAULT_CONFIG_TEMPLATE)?;
        }

        Ok(path)
    }

    /// Get a config value by dot-notation key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "output.format" => Some(self.output.format.to_string()),
            "output.group" => Some(self.output.group.to_string()),
            "singularize.irregular" => Some(format!("{:?}", self.irregular_pairs())),
            "singularize.uncountable" => Some(format!("{:?}", self.singularize.uncountable)),
            _ => None,
        }
    }

    /// Set a config value by dot-notation key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "output.format" => {
                self.output.format = value.parse()?;
                Ok(())
            }
            "output.group" => {
                self.output.group = parse_bool(key, value)?;
                Ok(())
            }
            "singularize.irregular" => {
                self.singularize.irregular = parse_string_list(value)?
                    .into_iter()
                    .map(|item| parse_pair(key, &item))
                    .collect::<Result<_>>()?;
                Ok(())
            }
            "singularize.uncountable" => {
                self.singularize.uncountable = parse_string_list(value)?;
                Ok(())
            }
            _ => Err(FileInfoError::ConfigKeyNotFound {
                key: key.to_string(),
            }),
        }
    }

    /// List all config keys with their current values
    pub fn list(&self) -> Vec<(String, String)> {
        [
            "output.format",
            "output.group",
            "singularize.irregular",
            "singularize.uncountable",
        ]
        .into_iter()
        .filter_map(|key| self.get(key).map(|value| (key.to_string(), value)))
        .collect()
    }

    fn irregular_pairs(&self) -> Vec<String> {
        let mut pairs: Vec<String> = self
            .singularize
            .irregular
            .iter()
            .map(|(plural, singular)| format!("{}={}", plural, singular))
            .collect();
        pairs.sort();
        pairs
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(FileInfoError::InvalidConfigValue {
            key: key.to_string(),
            message: format!("expected true or false, got '{}'", other),
        }),
    }
}

/// Parse a `plural=singular` pair
fn parse_pair(key: &str, item: &str) -> Result<(String, String)> {
    match item.split_once('=') {
        Some((plural, singular)) if !plural.trim().is_empty() && !singular.trim().is_empty() => {
            Ok((plural.trim().to_string(), singular.trim().to_string()))
        }
        _ => Err(FileInfoError::InvalidConfigValue {
            key: key.to_string(),
            message: format!("expected plural=singular, got '{}'", item),
        }),
    }
}

/// Parse a comma-separated or JSON-like list string
fn parse_string_list(value: &str) -> Result<Vec<String>> {
    let trimmed = value.trim();

    // Try JSON array format first: ["a", "b"]
    let inner = if trimmed.starts_with('[') && trimmed.ends_with(']') {
        &trimmed[1..trimmed.len() - 1]
    } else {
        trimmed
    };

    let items: Vec<String> = inner
        .split(',')
        .map(|s| s.trim().trim_matches('"').trim_matches('\'').to_string())
        .filter(|s| !s.is_empty())
        .collect();

    Ok(items)
}

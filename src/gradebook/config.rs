use crate::error::{GradebookError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_BAR_GLYPH: &str = "█";

/// Environment variable that overrides the configuration directory.
pub const CONFIG_DIR_ENV: &str = "GRADEBOOK_CONFIG_DIR";

/// Setting keys accepted by [`GradebookConfig::get`] and [`GradebookConfig::set`].
pub const KEYS: [&str; 3] = ["color", "bar-glyph", "banner"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorChoice::Auto => f.write_str("auto"),
            ColorChoice::Always => f.write_str("always"),
            ColorChoice::Never => f.write_str("never"),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = GradebookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorChoice::Auto),
            "always" => Ok(ColorChoice::Always),
            "never" => Ok(ColorChoice::Never),
            other => Err(GradebookError::Config(format!(
                "invalid color '{}': expected auto, always or never",
                other
            ))),
        }
    }
}

/// Configuration for gradebook, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GradebookConfig {
    /// When to emit ANSI styling
    #[serde(default)]
    pub color: ColorChoice,

    /// Glyph repeated once per student in the grade distribution bars
    #[serde(default = "default_bar_glyph")]
    pub bar_glyph: String,

    /// Show the title banner when the menu starts
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_bar_glyph() -> String {
    DEFAULT_BAR_GLYPH.to_string()
}

fn default_banner() -> bool {
    true
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::default(),
            bar_glyph: default_bar_glyph(),
            banner: default_banner(),
        }
    }
}

impl GradebookConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: GradebookConfig = serde_json::from_str(&content)?;
        if config.bar_glyph.is_empty() {
            return Err(GradebookError::Config(
                "bar-glyph cannot be empty".to_string(),
            ));
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        tracing::info!(path = %config_path.display(), "config saved");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "color" => Some(self.color.to_string()),
            "bar-glyph" => Some(self.bar_glyph.clone()),
            "banner" => Some(self.banner.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "color" => self.color = value.parse()?,
            "bar-glyph" => {
                let glyph = value.trim();
                if glyph.is_empty() {
                    return Err(GradebookError::Config(
                        "bar-glyph cannot be empty".to_string(),
                    ));
                }
                self.bar_glyph = glyph.to_string();
            }
            "banner" => {
                self.banner = value.trim().parse().map_err(|_| {
                    GradebookError::Config(format!(
                        "invalid banner '{}': expected true or false",
                        value
                    ))
                })?
            }
            other => {
                return Err(GradebookError::Config(format!(
                    "unknown config key '{}'",
                    other
                )))
            }
        }
        Ok(())
    }

    /// All settings as key/value pairs, in [`KEYS`] order.
    pub fn list_all(&self) -> Vec<(String, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (k.to_string(), v)))
            .collect()
    }
}

/// Resolves the configuration directory.
///
/// Precedence: explicit override, then `GRADEBOOK_CONFIG_DIR`, then the platform
/// config directory.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "gradebook", "gradebook")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| GradebookError::Config("could not determine config directory".to_string()))
}

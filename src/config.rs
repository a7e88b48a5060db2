use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Optional user configuration, loaded from ~/.config/ghplan/config.toml.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Font used when --font is not given
    #[serde(default)]
    pub default_font: Option<String>,

    /// Rendered cell size in pixels
    #[serde(default = "default_cell_size")]
    pub cell_size: u32,

    /// Gutter between rendered cells in pixels
    #[serde(default = "default_cell_padding")]
    pub cell_padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_font: None,
            cell_size: default_cell_size(),
            cell_padding: default_cell_padding(),
        }
    }
}

fn default_cell_size() -> u32 {
    20
}

fn default_cell_padding() -> u32 {
    2
}

/// Get the config file path (~/.config/ghplan/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("ghplan");
    Ok(config_dir.join("config.toml"))
}

/// Load config, falling back to defaults when no config file exists.
pub fn load_config() -> Result<Config> {
    let path = config_path()?;

    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_github_cell_geometry() {
        let config = Config::default();
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.cell_padding, 2);
        assert!(config.default_font.is_none());
    }

    #[test]
    fn test_partial_config_fills_in_defaults() {
        let config: Config = toml::from_str("default_font = \"/tmp/font.ttf\"").unwrap();
        assert_eq!(config.default_font.as_deref(), Some("/tmp/font.ttf"));
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.cell_padding, 2);
    }
}

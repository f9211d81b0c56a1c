//! Configuration file and effective settings

use crate::cli::{Cli, OutputFormat};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use wordiff_core::{CompareOptions, DEFAULT_MAX_CELLS};

/// When to emit ANSI colours
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub diff: DiffConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    pub ignore_whitespace: bool,
    pub ignore_case: bool,
    /// 0 disables the size guard
    pub max_cells: usize,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            ignore_whitespace: false,
            ignore_case: false,
            max_cells: DEFAULT_MAX_CELLS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: ColorMode,
    pub strikethrough_deletions: bool,
    pub stats: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            strikethrough_deletions: true,
            stats: false,
        }
    }
}

impl Config {
    /// `<config dir>/wordiff/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wordiff").join("config.toml"))
    }

    /// Load an explicit config file, or the default one if it exists
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = Self::from_toml(&contents)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }
}

/// Config file merged with command-line flags
#[derive(Debug, Clone)]
pub struct Settings {
    pub options: CompareOptions,
    pub max_cells: Option<usize>,
    pub format: OutputFormat,
    pub color: bool,
    pub strikethrough_deletions: bool,
    pub stats: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config, stdout_is_tty: bool) -> Self {
        let max_cells = cli.max_cells.unwrap_or(config.diff.max_cells);
        let color = match cli.color.unwrap_or(config.ui.color) {
            ColorMode::Auto => stdout_is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        };

        Self {
            options: CompareOptions {
                ignore_whitespace: cli.ignore_whitespace || config.diff.ignore_whitespace,
                ignore_case: cli.ignore_case || config.diff.ignore_case,
            },
            max_cells: (max_cells > 0).then_some(max_cells),
            format: cli.format,
            color,
            strikethrough_deletions: config.ui.strikethrough_deletions,
            stats: cli.stats || config.ui.stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["wordiff"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["old", "new"]);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.diff.max_cells, DEFAULT_MAX_CELLS);
        assert_eq!(config.ui.color, ColorMode::Auto);
        assert!(config.ui.strikethrough_deletions);
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [diff]
            ignore_case = true
            max_cells = 0

            [ui]
            color = "never"
            "#,
        )
        .unwrap();
        assert!(config.diff.ignore_case);
        assert!(!config.diff.ignore_whitespace);
        assert_eq!(config.diff.max_cells, 0);
        assert_eq!(config.ui.color, ColorMode::Never);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("[ui]\ncolor = \"sometimes\"").is_err());
    }

    #[test]
    fn test_load_explicit_missing() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui]\nstats = true\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(config.ui.stats);
    }

    #[test]
    fn test_resolve_flags_override() {
        let config = Config::from_toml("[ui]\ncolor = \"never\"").unwrap();
        let settings = Settings::resolve(&cli(&["-w", "--color", "always"]), &config, false);

        assert!(settings.options.ignore_whitespace);
        assert!(!settings.options.ignore_case);
        assert!(settings.color);
        assert_eq!(settings.max_cells, Some(DEFAULT_MAX_CELLS));
    }

    #[test]
    fn test_resolve_config_applies() {
        let config = Config::from_toml("[diff]\nignore_case = true\n[ui]\nstats = true").unwrap();
        let settings = Settings::resolve(&cli(&[]), &config, true);

        assert!(settings.options.ignore_case);
        assert!(settings.stats);
        assert!(settings.color);
    }

    #[test]
    fn test_resolve_zero_disables_limit() {
        let settings = Settings::resolve(&cli(&["--max-cells", "0"]), &Config::default(), false);
        assert_eq!(settings.max_cells, None);
        assert!(!settings.color);
    }
}

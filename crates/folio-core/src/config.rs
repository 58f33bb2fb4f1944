//! Hero configuration
//!
//! Read from `~/.folio/hero.toml` or an explicit path. Every field is
//! optional; a missing default file means the built-in hero.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::hero::DEFAULT_LINES;
use crate::constants::layout::{DEFAULT_HEADER_HEIGHT, DEFAULT_TRAILING_HEIGHT};
use crate::constants::nav::DEFAULT_BRAND;
use crate::constants::ui::REDUCED_MOTION_ENV;
use crate::error::{FolioError, Result};
use crate::hero::{HeroLines, PageLayout};
use crate::nav::{default_items, NavItem};
use crate::paths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    /// Hero text, one entry per line
    pub lines: Vec<String>,
    /// Pixels above the hero container
    pub header_height: f64,
    /// Pixels below the hero container
    pub trailing_height: f64,
    /// Force reduced motion on; `None` or `false` defers to the flag and environment
    pub reduced_motion: Option<bool>,
    /// Terminal palette: `light`, `dark` or `auto`
    pub theme: Option<String>,
    /// Brand shown in the navigation bar
    pub brand: String,
    /// Navigation entries
    pub nav: Vec<NavItem>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_LINES.iter().map(|s| s.to_string()).collect(),
            header_height: DEFAULT_HEADER_HEIGHT,
            trailing_height: DEFAULT_TRAILING_HEIGHT,
            reduced_motion: None,
            theme: None,
            brand: DEFAULT_BRAND.to_string(),
            nav: default_items(),
        }
    }
}

impl HeroConfig {
    /// Load from `path`, or from the default location when `None`.
    ///
    /// An explicit path must exist. The default file may be absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = paths::config_file();
                if default_path.exists() {
                    Self::from_file(&default_path)
                } else {
                    tracing::debug!(path = %default_path.display(), "No hero config; using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| FolioError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&raw).map_err(|source| FolioError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), lines = config.lines.len(), "Loaded hero config");
        Ok(config)
    }

    /// Validated hero lines
    pub fn hero_lines(&self) -> Result<HeroLines> {
        HeroLines::from_texts(self.lines.iter().cloned())
    }

    /// Page regions around the hero; negative heights are treated as zero
    pub fn page_layout(&self) -> PageLayout {
        let sanitize = |h: f64| if h.is_finite() { h.max(0.0) } else { 0.0 };
        PageLayout {
            header_height: sanitize(self.header_height),
            trailing_height: sanitize(self.trailing_height),
        }
    }

    /// Resolve the reduced-motion preference.
    ///
    /// On as soon as the command-line flag, the environment variable or the
    /// config file asks for it.
    pub fn reduced_motion(&self, cli_flag: bool) -> bool {
        let from_env = std::env::var(REDUCED_MOTION_ENV).ok();
        resolve_reduced_motion(cli_flag, from_env.as_deref(), self.reduced_motion)
    }
}

fn resolve_reduced_motion(cli_flag: bool, env_value: Option<&str>, config: Option<bool>) -> bool {
    let env_on = env_value
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "reduce"))
        .unwrap_or(false);
    cli_flag || env_on || config.unwrap_or(false)
}

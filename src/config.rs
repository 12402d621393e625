//! Cursor configuration.
//!
//! Every field has a default, so a config file only lists what it changes:
//!
//! ```toml
//! [ring]
//! hover_color = "#22d3ee"
//!
//! [glyphs]
//! ring = "o"
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::types::Rgba;

/// Environment variable naming a config file for [`CursorConfig::from_env`].
pub const CONFIG_ENV: &str = "FOLIO_CURSOR_CONFIG";

/// Indicator configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CursorConfig {
    pub dot: DotConfig,
    pub ring: RingConfig,
    pub glyphs: GlyphConfig,
}

/// The small center dot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DotConfig {
    pub size: f32,
    pub color: Rgba,
    pub pressed_opacity: f32,
    pub pressed_scale: f32,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            size: 8.0,
            color: Rgba::WHITE,
            pressed_opacity: 0.7,
            pressed_scale: 0.8,
        }
    }
}

/// The outer ring.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub size: f32,
    pub hover_size: f32,
    pub color: Rgba,
    pub hover_color: Rgba,
    pub opacity: f32,
    pub hover_opacity: f32,
    pub pressed_scale: f32,
    /// Scale of the ring's inner border while pressed.
    pub pressed_inner_scale: f32,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: 32.0,
            hover_size: 40.0,
            color: Rgba::WHITE,
            hover_color: Rgba::INDIGO,
            opacity: 0.5,
            hover_opacity: 0.9,
            pressed_scale: 0.8,
            pressed_inner_scale: 0.9,
        }
    }
}

/// Terminal glyphs used to draw the indicator in a single cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub ring: char,
    pub hover_ring: char,
    pub pressed: char,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            ring: '○',
            hover_ring: '◉',
            pressed: '•',
        }
    }
}

impl CursorConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!(path = %path.display(), "cursor config loaded");
        Ok(config)
    }

    /// Load the file named by `FOLIO_CURSOR_CONFIG`, or defaults when unset.
    ///
    /// A file that is set but unreadable or invalid falls back to defaults
    /// with a warning.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = ?path, error = %err, "using default cursor config");
                Self::default()
            }
        }
    }
}

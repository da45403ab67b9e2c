//! Optional TOML config file. Every field is optional; the CLI layer
//! merges these under explicit flags, so a file only fills gaps.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, VrshotError};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub threshold: Option<f64>,
    pub color_threshold: Option<u8>,
    pub ignore_antialiasing: Option<bool>,
    pub max_height: Option<u32>,
    pub diff_overlay: Option<bool>,
    pub label_font: Option<String>,
    pub label_font_size: Option<f32>,
}

impl FileConfig {
    /// Load a config file. A `None` path yields the empty config.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path).map_err(|e| {
            VrshotError::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&raw).map_err(|e| {
            VrshotError::config(format!("Invalid config {}: {}", path.display(), e))
        })
    }
}

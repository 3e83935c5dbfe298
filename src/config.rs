//! Configuration loading for YatraNav.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::GridSize;
use crate::error::Result;
use crate::explore::BehaviorConfig;

/// Main configuration structure.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct YatraConfig {
    #[serde(default)]
    pub grid: GridConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

/// Survey grid parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in cells (default: 20)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Grid height in cells (default: 20)
    #[serde(default = "default_height")]
    pub height: i32,

    /// World meters per grid cell (default: 1.0)
    #[serde(default = "default_cell_size")]
    pub cell_size: f32,
}

impl GridConfig {
    /// The configured extent as a [`GridSize`].
    pub fn size(&self) -> GridSize {
        GridSize::new(self.width, self.height)
    }
}

fn default_width() -> i32 {
    20
}

fn default_height() -> i32 {
    20
}

fn default_cell_size() -> f32 {
    1.0
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            cell_size: default_cell_size(),
        }
    }
}

impl YatraConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: YatraConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

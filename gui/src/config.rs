//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (local overrides)
//! 3. Environment variables (`GOL_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,
    /// Initial contents of the dimension inputs
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory next to the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // GOL_GRID__COLUMNS=20 -> grid.columns = 20
        figment = figment.merge(Env::prefixed("GOL_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Game of Life".to_string(),
            width: 1200.0,
            height: 1000.0,
        }
    }
}

/// Pre-filled grid size. Still validated like typed input.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub columns: u32,
    pub rows: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            columns: 20,
            rows: 20,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Side of one cell in points
    pub cell_size: f32,
    /// Space between cells in points
    pub cell_gap: f32,
    /// RGB
    pub alive_color: [u8; 3],
    /// RGB
    pub dead_color: [u8; 3],
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            cell_gap: 1.0,
            // light coral
            alive_color: [240, 128, 128],
            // light slate gray
            dead_color: [119, 136, 153],
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[from] figment::Error);

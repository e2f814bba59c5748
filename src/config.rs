use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::brushes::BrushKind;
use crate::error::BoardResult;
use crate::palette::PaletteColor;
use crate::selector::{validate_size, BrushSettings};

/// Environment variable naming an optional JSON config file
pub const CONFIG_ENV: &str = "DRAWING_BOARD_CONFIG";

/// Startup configuration. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub title: String,
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub brush: BrushKind,
    pub color: PaletteColor,
    pub size: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            title: "Graphical Drawing Board".to_owned(),
            canvas_width: 600.0,
            canvas_height: 400.0,
            brush: BrushKind::Pencil,
            color: PaletteColor::Black,
            size: 3,
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> BoardResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        validate_size(config.size)?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> BoardResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from `$DRAWING_BOARD_CONFIG` if set, otherwise use defaults
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", path, err);
                Self::default()
            }
        }
    }

    /// Initial brush selection
    pub fn settings(&self) -> BrushSettings {
        BrushSettings {
            kind: self.brush,
            color: self.color,
            size: self.size,
        }
    }
}

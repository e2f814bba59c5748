use egui::Color32;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BoardError;

/// Canvas background. The eraser paints with this color.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Outline used for star polygons regardless of fill
pub const STAR_OUTLINE: Color32 = Color32::BLACK;

/// The named colors offered by the color selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaletteColor {
    #[default]
    Black,
    Red,
    Blue,
    Green,
    Orange,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Red,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Orange,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "Black",
            Self::Red => "Red",
            Self::Blue => "Blue",
            Self::Green => "Green",
            Self::Orange => "Orange",
        }
    }

    /// RGB value used when painting
    pub fn color32(&self) -> Color32 {
        match self {
            Self::Black => Color32::BLACK,
            Self::Red => Color32::from_rgb(255, 0, 0),
            Self::Blue => Color32::from_rgb(0, 0, 255),
            // Named "green" is the darker web green, not pure #00ff00
            Self::Green => Color32::from_rgb(0, 128, 0),
            Self::Orange => Color32::from_rgb(255, 165, 0),
        }
    }
}

impl FromStr for PaletteColor {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownColor(s.to_string()))
    }
}

impl std::fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

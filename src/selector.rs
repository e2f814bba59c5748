use serde::{Deserialize, Serialize};

use crate::brushes::{BrushKind, BrushType, DEFAULT_SIZE};
use crate::error::{BoardError, BoardResult};
use crate::palette::PaletteColor;

pub const MIN_SIZE: u32 = 1;
pub const MAX_SIZE: u32 = 15;

/// Reject sizes the size slider cannot produce
pub fn validate_size(size: u32) -> BoardResult<u32> {
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(BoardError::InvalidSize(size))
    }
}

/// Currently selected brush type, color and size.
/// The active brush is always rebuilt from these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushSettings {
    pub kind: BrushKind,
    pub color: PaletteColor,
    pub size: u32,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            kind: BrushKind::default(),
            color: PaletteColor::default(),
            size: DEFAULT_SIZE,
        }
    }
}

impl BrushSettings {
    /// Fresh brush instance for the current selection
    pub fn build(&self) -> BrushType {
        BrushType::new(self.kind, self.color.color32(), self.size)
    }
}

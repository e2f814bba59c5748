use egui::Color32;

use super::{Brush, Segment};
use crate::jitter::Jitter;
use crate::palette::BACKGROUND;
use crate::surface::{LineCap, Surface};

pub const ERASER_DEFAULT_SIZE: u32 = 10;

/// Paints over the canvas with the background color
#[derive(Debug, Clone, PartialEq)]
pub struct EraserBrush {
    size: u32,
}

impl EraserBrush {
    pub fn new(size: u32) -> Self {
        Self { size }
    }
}

impl Default for EraserBrush {
    fn default() -> Self {
        Self::new(ERASER_DEFAULT_SIZE)
    }
}

impl Brush for EraserBrush {
    fn label(&self) -> &'static str {
        "Eraser"
    }

    fn color(&self) -> Color32 {
        BACKGROUND
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, _jitter: &mut dyn Jitter) {
        surface.draw_line(segment.from, segment.to, BACKGROUND, self.size as f32, LineCap::Round);
    }
}

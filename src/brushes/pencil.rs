use egui::Color32;

use super::{Brush, Segment, DEFAULT_COLOR, DEFAULT_SIZE};
use crate::jitter::Jitter;
use crate::surface::{LineCap, Surface};

/// Plain round-capped line
#[derive(Debug, Clone, PartialEq)]
pub struct PencilBrush {
    color: Color32,
    size: u32,
}

impl PencilBrush {
    pub fn new(color: Color32, size: u32) -> Self {
        Self { color, size }
    }
}

impl Default for PencilBrush {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_SIZE)
    }
}

impl Brush for PencilBrush {
    fn label(&self) -> &'static str {
        "Pencil"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, _jitter: &mut dyn Jitter) {
        // Round caps hide the joints between consecutive segments
        surface.draw_line(segment.from, segment.to, self.color, self.size as f32, LineCap::Round);
    }
}

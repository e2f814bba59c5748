use egui::Color32;

use super::{Brush, Segment, DEFAULT_COLOR, DEFAULT_SIZE};
use crate::jitter::Jitter;
use crate::surface::{LineCap, Surface};

/// Flat-nib look: a wide butt-capped line with a narrower one over it
#[derive(Debug, Clone, PartialEq)]
pub struct CalligraphyBrush {
    color: Color32,
    size: u32,
}

impl CalligraphyBrush {
    pub fn new(color: Color32, size: u32) -> Self {
        Self { color, size }
    }
}

impl Default for CalligraphyBrush {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_SIZE)
    }
}

impl Brush for CalligraphyBrush {
    fn label(&self) -> &'static str {
        "Calligraphy"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, _jitter: &mut dyn Jitter) {
        let size = self.size as f32;
        surface.draw_line(segment.from, segment.to, self.color, size * 2.0, LineCap::Butt);
        surface.draw_line(segment.from, segment.to, self.color, size, LineCap::Butt);
    }
}

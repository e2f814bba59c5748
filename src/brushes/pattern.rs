use egui::{Color32, Rect, vec2};

use super::{Brush, Segment, DEFAULT_COLOR, DEFAULT_SIZE};
use crate::jitter::Jitter;
use crate::surface::Surface;

/// A square is stamped on every N-th interpolation step
pub const PATTERN_INTERVAL: usize = 5;

/// Dashed stroke made of filled squares
#[derive(Debug, Clone, PartialEq)]
pub struct PatternBrush {
    color: Color32,
    size: u32,
}

impl PatternBrush {
    pub fn new(color: Color32, size: u32) -> Self {
        Self { color, size }
    }
}

impl Default for PatternBrush {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_SIZE)
    }
}

impl Brush for PatternBrush {
    fn label(&self) -> &'static str {
        "Pattern"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, _jitter: &mut dyn Jitter) {
        let half = self.size as f32;
        for (i, point) in segment.interpolate() {
            if i % PATTERN_INTERVAL == 0 {
                let square = Rect::from_center_size(point, vec2(half * 2.0, half * 2.0));
                surface.fill_rect(square, self.color);
            }
        }
    }
}

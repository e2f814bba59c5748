use egui::{Color32, Pos2, Rect, vec2};

use super::{Brush, Segment, DEFAULT_COLOR, DEFAULT_SIZE};
use crate::jitter::Jitter;
use crate::surface::Surface;

/// Scatters one-pixel dots in a disc around each interpolation point
#[derive(Debug, Clone, PartialEq)]
pub struct SprayBrush {
    color: Color32,
    size: u32,
}

impl SprayBrush {
    pub fn new(color: Color32, size: u32) -> Self {
        Self { color, size }
    }

    /// Radius of the spray disc in pixels
    pub fn radius(&self) -> i32 {
        self.size as i32 * 2
    }

    /// Dots attempted per interpolation point; misses outside the disc are dropped
    pub fn attempts_per_point(&self) -> usize {
        self.size as usize * 2
    }

    fn dot(&self, surface: &mut dyn Surface, at: Pos2) {
        surface.fill_ellipse(Rect::from_min_size(at, vec2(1.0, 1.0)), self.color);
    }
}

impl Default for SprayBrush {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_SIZE)
    }
}

impl Brush for SprayBrush {
    fn label(&self) -> &'static str {
        "Spray"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, jitter: &mut dyn Jitter) {
        let radius = self.radius();
        for (_, point) in segment.interpolate() {
            let mut kept = 0;
            for _ in 0..self.attempts_per_point() {
                let dx = jitter.offset(radius);
                let dy = jitter.offset(radius);
                if dx * dx + dy * dy < radius * radius {
                    self.dot(surface, point + vec2(dx as f32, dy as f32));
                    kept += 1;
                }
            }
            // Every sample point leaves a mark even when all attempts miss
            if kept == 0 {
                self.dot(surface, point);
            }
        }
    }
}

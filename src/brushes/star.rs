use egui::{Color32, Pos2, pos2};

use super::{Brush, Segment, DEFAULT_COLOR, DEFAULT_SIZE};
use crate::jitter::Jitter;
use crate::palette::STAR_OUTLINE;
use crate::surface::Surface;

/// A star is stamped on every N-th interpolation step
pub const STAR_INTERVAL: usize = 10;

const STAR_POINTS: usize = 5;

/// Stamps jittered five-point stars along the stroke
#[derive(Debug, Clone, PartialEq)]
pub struct StarBrush {
    color: Color32,
    size: u32,
}

impl StarBrush {
    pub fn new(color: Color32, size: u32) -> Self {
        Self { color, size }
    }

    /// Vertices of one star centered at `center`.
    ///
    /// Each vertex gets an independent random stretch and sign on each axis;
    /// even vertices reach further along x, odd ones along y. The result is an
    /// irregular star rather than a regular pentagram.
    pub fn star_points(&self, center: Pos2, jitter: &mut dyn Jitter) -> Vec<Pos2> {
        let reach = self.size as f32 * 2.0 * 0.5;
        (0..STAR_POINTS)
            .map(|k| {
                let (x_arm, y_arm) = if k % 2 == 0 { (1.0, 0.5) } else { (0.5, 1.0) };
                let px = center.x + reach * (1.0 + 0.5 * jitter.unit()) * x_arm * jitter.sign();
                let py = center.y + reach * (1.0 + 0.5 * jitter.unit()) * y_arm * jitter.sign();
                pos2(px, py)
            })
            .collect()
    }
}

impl Default for StarBrush {
    fn default() -> Self {
        Self::new(DEFAULT_COLOR, DEFAULT_SIZE)
    }
}

impl Brush for StarBrush {
    fn label(&self) -> &'static str {
        "Star"
    }

    fn color(&self) -> Color32 {
        self.color
    }

    fn size(&self) -> u32 {
        self.size
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, jitter: &mut dyn Jitter) {
        for (i, point) in segment.interpolate() {
            if i % STAR_INTERVAL == 0 {
                let points = self.star_points(point, jitter);
                surface.fill_polygon(points, self.color, STAR_OUTLINE);
            }
        }
    }
}

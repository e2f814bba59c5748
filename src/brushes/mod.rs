use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::BoardError;
use crate::jitter::Jitter;
use crate::surface::Surface;

/// Default brush color when none is chosen
pub const DEFAULT_COLOR: Color32 = Color32::BLACK;
/// Default brush size when none is chosen
pub const DEFAULT_SIZE: u32 = 3;

/// The line between two consecutive pointer positions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Pos2,
    pub to: Pos2,
}

impl Segment {
    pub fn new(from: Pos2, to: Pos2) -> Self {
        Self { from, to }
    }

    /// Number of interpolation steps: the longer axis extent in whole pixels,
    /// never less than one so zero-length segments still produce a point.
    pub fn steps(&self) -> usize {
        let delta = self.to - self.from;
        let extent = delta.x.abs().max(delta.y.abs());
        if !extent.is_finite() {
            return 1;
        }
        (extent as usize).max(1)
    }

    /// Evenly spaced points from `from` towards `to` (exclusive), paired
    /// with their step index
    pub fn interpolate(&self) -> impl Iterator<Item = (usize, Pos2)> + '_ {
        let steps = self.steps();
        (0..steps).map(move |i| {
            let t = i as f32 / steps as f32;
            (i, self.from.lerp(self.to, t))
        })
    }
}

/// A stroke-rendering strategy with a color and a size
pub trait Brush {
    /// Display name of the brush type
    fn label(&self) -> &'static str;

    fn color(&self) -> Color32;

    fn size(&self) -> u32;

    /// Draw this brush's effect for one segment onto the surface.
    /// Only appends to the surface.
    fn render(&self, surface: &mut dyn Surface, segment: Segment, jitter: &mut dyn Jitter);
}

mod calligraphy;
mod eraser;
mod pattern;
mod pencil;
mod spray;
mod star;

pub use calligraphy::CalligraphyBrush;
pub use eraser::{EraserBrush, ERASER_DEFAULT_SIZE};
pub use pattern::{PatternBrush, PATTERN_INTERVAL};
pub use pencil::PencilBrush;
pub use spray::SprayBrush;
pub use star::{StarBrush, STAR_INTERVAL};

/// The selectable brush types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushKind {
    #[default]
    Pencil,
    Spray,
    Calligraphy,
    Pattern,
    Star,
    Eraser,
}

impl BrushKind {
    pub const ALL: [BrushKind; 6] = [
        BrushKind::Pencil,
        BrushKind::Spray,
        BrushKind::Calligraphy,
        BrushKind::Pattern,
        BrushKind::Star,
        BrushKind::Eraser,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pencil => "Pencil",
            Self::Spray => "Spray",
            Self::Calligraphy => "Calligraphy",
            Self::Pattern => "Pattern",
            Self::Star => "Star",
            Self::Eraser => "Eraser",
        }
    }
}

impl FromStr for BrushKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| BoardError::UnknownBrush(s.to_string()))
    }
}

impl std::fmt::Display for BrushKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Enum over all brush implementations.
/// Avoids `Box<dyn Brush>` for the active brush held by the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BrushType {
    Pencil(PencilBrush),
    Spray(SprayBrush),
    Calligraphy(CalligraphyBrush),
    Pattern(PatternBrush),
    Star(StarBrush),
    Eraser(EraserBrush),
}

impl BrushType {
    /// Build a brush of the given kind. The eraser ignores `color`.
    pub fn new(kind: BrushKind, color: Color32, size: u32) -> Self {
        match kind {
            BrushKind::Pencil => Self::Pencil(PencilBrush::new(color, size)),
            BrushKind::Spray => Self::Spray(SprayBrush::new(color, size)),
            BrushKind::Calligraphy => Self::Calligraphy(CalligraphyBrush::new(color, size)),
            BrushKind::Pattern => Self::Pattern(PatternBrush::new(color, size)),
            BrushKind::Star => Self::Star(StarBrush::new(color, size)),
            BrushKind::Eraser => Self::Eraser(EraserBrush::new(size)),
        }
    }

    pub fn kind(&self) -> BrushKind {
        match self {
            Self::Pencil(_) => BrushKind::Pencil,
            Self::Spray(_) => BrushKind::Spray,
            Self::Calligraphy(_) => BrushKind::Calligraphy,
            Self::Pattern(_) => BrushKind::Pattern,
            Self::Star(_) => BrushKind::Star,
            Self::Eraser(_) => BrushKind::Eraser,
        }
    }
}

impl Default for BrushType {
    fn default() -> Self {
        Self::Pencil(PencilBrush::default())
    }
}

impl Brush for BrushType {
    fn label(&self) -> &'static str {
        match self {
            Self::Pencil(brush) => brush.label(),
            Self::Spray(brush) => brush.label(),
            Self::Calligraphy(brush) => brush.label(),
            Self::Pattern(brush) => brush.label(),
            Self::Star(brush) => brush.label(),
            Self::Eraser(brush) => brush.label(),
        }
    }

    fn color(&self) -> Color32 {
        match self {
            Self::Pencil(brush) => brush.color(),
            Self::Spray(brush) => brush.color(),
            Self::Calligraphy(brush) => brush.color(),
            Self::Pattern(brush) => brush.color(),
            Self::Star(brush) => brush.color(),
            Self::Eraser(brush) => brush.color(),
        }
    }

    fn size(&self) -> u32 {
        match self {
            Self::Pencil(brush) => brush.size(),
            Self::Spray(brush) => brush.size(),
            Self::Calligraphy(brush) => brush.size(),
            Self::Pattern(brush) => brush.size(),
            Self::Star(brush) => brush.size(),
            Self::Eraser(brush) => brush.size(),
        }
    }

    fn render(&self, surface: &mut dyn Surface, segment: Segment, jitter: &mut dyn Jitter) {
        match self {
            Self::Pencil(brush) => brush.render(surface, segment, jitter),
            Self::Spray(brush) => brush.render(surface, segment, jitter),
            Self::Calligraphy(brush) => brush.render(surface, segment, jitter),
            Self::Pattern(brush) => brush.render(surface, segment, jitter),
            Self::Star(brush) => brush.render(surface, segment, jitter),
            Self::Eraser(brush) => brush.render(surface, segment, jitter),
        }
    }
}

/// Factory: build a brush from its display name
pub fn new_brush(name: &str, color: Color32, size: u32) -> Option<BrushType> {
    name.parse::<BrushKind>()
        .ok()
        .map(|kind| BrushType::new(kind, color, size))
}

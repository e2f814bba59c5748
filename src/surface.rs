use egui::{Color32, Pos2, Rect};

/// How the ends of a line primitive are finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    /// Half-disc past each endpoint, so consecutive segments join smoothly
    Round,
    /// Line stops exactly at its endpoints
    Butt,
}

/// A single drawing operation recorded on a surface
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
        width: f32,
        cap: LineCap,
    },
    FilledEllipse {
        rect: Rect,
        color: Color32,
    },
    FilledRect {
        rect: Rect,
        color: Color32,
    },
    FilledPolygon {
        points: Vec<Pos2>,
        fill: Color32,
        outline: Color32,
    },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Line { .. } => "line",
            Self::FilledEllipse { .. } => "ellipse",
            Self::FilledRect { .. } => "rect",
            Self::FilledPolygon { .. } => "polygon",
        }
    }

    /// Fill (or line) color of the primitive
    pub fn color(&self) -> Color32 {
        match self {
            Self::Line { color, .. }
            | Self::FilledEllipse { color, .. }
            | Self::FilledRect { color, .. } => *color,
            Self::FilledPolygon { fill, .. } => *fill,
        }
    }
}

/// The 2D drawing target brushes render onto.
///
/// Drawing is additive: every call appends to what is already there.
pub trait Surface {
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32, cap: LineCap);

    fn fill_ellipse(&mut self, rect: Rect, color: Color32);

    fn fill_rect(&mut self, rect: Rect, color: Color32);

    fn fill_polygon(&mut self, points: Vec<Pos2>, fill: Color32, outline: Color32);

    /// Remove everything drawn so far
    fn clear(&mut self);
}

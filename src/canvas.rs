use egui::{Color32, Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};

use crate::surface::{LineCap, Primitive, Surface};

const POLYGON_OUTLINE_WIDTH: f32 = 1.0;

/// In-memory, append-only drawing surface.
///
/// Primitives are kept in canvas coordinates (origin at the top-left of the
/// drawing area) and replayed onto an egui painter every frame.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    primitives: Vec<Primitive>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Paint all primitives, offsetting them by the on-screen canvas origin
    pub fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for primitive in &self.primitives {
            for shape in to_shapes(primitive, offset) {
                painter.add(shape);
            }
        }
    }
}

impl Surface for Canvas {
    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32, width: f32, cap: LineCap) {
        self.primitives.push(Primitive::Line { from, to, color, width, cap });
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color32) {
        self.primitives.push(Primitive::FilledEllipse { rect, color });
    }

    fn fill_rect(&mut self, rect: Rect, color: Color32) {
        self.primitives.push(Primitive::FilledRect { rect, color });
    }

    fn fill_polygon(&mut self, points: Vec<Pos2>, fill: Color32, outline: Color32) {
        self.primitives.push(Primitive::FilledPolygon { points, fill, outline });
    }

    fn clear(&mut self) {
        self.primitives.clear();
    }
}

/// Convert one primitive into the egui shapes that draw it
fn to_shapes(primitive: &Primitive, offset: Vec2) -> Vec<Shape> {
    match primitive {
        Primitive::Line { from, to, color, width, cap } => {
            let (from, to) = (*from + offset, *to + offset);
            let mut shapes = vec![Shape::line_segment(
                [from, to],
                EguiStroke::new(*width, *color),
            )];
            // egui segments have butt ends; round caps are discs at each end
            if *cap == LineCap::Round {
                let radius = *width / 2.0;
                shapes.push(Shape::circle_filled(from, radius, *color));
                shapes.push(Shape::circle_filled(to, radius, *color));
            }
            shapes
        }
        Primitive::FilledEllipse { rect, color } => {
            let rect = rect.translate(offset);
            vec![Shape::ellipse_filled(rect.center(), rect.size() / 2.0, *color)]
        }
        Primitive::FilledRect { rect, color } => {
            vec![Shape::rect_filled(rect.translate(offset), 0.0, *color)]
        }
        Primitive::FilledPolygon { points, fill, outline } => {
            let points: Vec<Pos2> = points.iter().map(|p| *p + offset).collect();
            vec![Shape::convex_polygon(
                points,
                *fill,
                EguiStroke::new(POLYGON_OUTLINE_WIDTH, *outline),
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_append_only() {
        let mut canvas = Canvas::new();
        assert!(canvas.is_empty());

        canvas.draw_line(pos2(0.0, 0.0), pos2(1.0, 1.0), Color32::RED, 2.0, LineCap::Butt);
        canvas.fill_rect(Rect::from_min_max(pos2(0.0, 0.0), pos2(2.0, 2.0)), Color32::BLUE);
        assert_eq!(canvas.len(), 2);
        assert_eq!(canvas.primitives()[0].kind(), "line");
        assert_eq!(canvas.primitives()[1].kind(), "rect");
    }

    #[test]
    fn test_clear_removes_everything() {
        let mut canvas = Canvas::new();
        canvas.fill_ellipse(Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)), Color32::RED);
        canvas.clear();
        assert!(canvas.is_empty());
    }

    fn line(cap: LineCap) -> Primitive {
        Primitive::Line {
            from: pos2(0.0, 0.0),
            to: pos2(10.0, 0.0),
            color: Color32::BLACK,
            width: 4.0,
            cap,
        }
    }

    #[test]
    fn test_round_cap_adds_end_discs() {
        assert_eq!(to_shapes(&line(LineCap::Round), Vec2::ZERO).len(), 3);
        assert_eq!(to_shapes(&line(LineCap::Butt), Vec2::ZERO).len(), 1);
    }

    #[test]
    fn test_paint_basics() {
        let mut canvas = Canvas::new();
        canvas.draw_line(pos2(0.0, 0.0), pos2(5.0, 5.0), Color32::RED, 3.0, LineCap::Round);
        canvas.fill_polygon(
            vec![pos2(0.0, 0.0), pos2(4.0, 0.0), pos2(2.0, 3.0)],
            Color32::RED,
            Color32::BLACK,
        );

        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        canvas.paint(&painter, pos2(10.0, 20.0));
    }
}

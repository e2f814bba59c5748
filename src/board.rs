use egui::Pos2;
use rand::rngs::StdRng;

use crate::brushes::{Brush, BrushKind, BrushType};
use crate::canvas::Canvas;
use crate::error::BoardResult;
use crate::input::PointerEvent;
use crate::jitter::{Jitter, RngJitter};
use crate::palette::PaletteColor;
use crate::selector::{validate_size, BrushSettings};
use crate::session::StrokeSession;
use crate::surface::Surface;

/// Owns everything a drawing gesture touches: the canvas, the drag session,
/// the brush selection and the random source for scattering brushes.
#[derive(Debug)]
pub struct Board<J = RngJitter<StdRng>> {
    canvas: Canvas,
    session: StrokeSession,
    settings: BrushSettings,
    brush: BrushType,
    jitter: J,
}

impl Board {
    pub fn new(settings: BrushSettings) -> Self {
        Self::with_jitter(settings, RngJitter::from_entropy())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BrushSettings::default())
    }
}

impl<J: Jitter> Board<J> {
    pub fn with_jitter(settings: BrushSettings, jitter: J) -> Self {
        Self {
            canvas: Canvas::new(),
            session: StrokeSession::new(),
            brush: settings.build(),
            settings,
            jitter,
        }
    }

    /// Dispatch a pointer event. Returns `true` if a segment was drawn.
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down(pos) => {
                self.pointer_down(pos);
                false
            }
            PointerEvent::Move(pos) => self.pointer_move(pos),
            PointerEvent::Up(pos) => {
                self.pointer_up(pos);
                false
            }
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        log::debug!("Stroke started at {:?} with {}", pos, self.brush.label());
        self.session.pointer_down(pos);
    }

    pub fn pointer_move(&mut self, pos: Pos2) -> bool {
        self.session
            .pointer_move(pos, &self.brush, &mut self.canvas, &mut self.jitter)
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if self.session.is_drawing() {
            log::debug!("Stroke ended at {:?}, {} primitives on canvas", pos, self.canvas.len());
        }
        self.session.pointer_up();
    }

    pub fn select_brush(&mut self, kind: BrushKind) {
        self.settings.kind = kind;
        self.rebuild_brush();
    }

    pub fn select_color(&mut self, color: PaletteColor) {
        self.settings.color = color;
        self.rebuild_brush();
    }

    pub fn set_size(&mut self, size: u32) -> BoardResult<()> {
        self.settings.size = validate_size(size)?;
        self.rebuild_brush();
        Ok(())
    }

    /// Select brush, color and size by their display values
    pub fn apply_names(&mut self, brush: &str, color: &str, size: u32) -> BoardResult<()> {
        let settings = BrushSettings {
            kind: brush.parse()?,
            color: color.parse()?,
            size: validate_size(size)?,
        };
        self.settings = settings;
        self.rebuild_brush();
        Ok(())
    }

    /// Wipe the canvas. An in-progress gesture keeps its last position.
    pub fn clear(&mut self) {
        log::info!("Clearing canvas ({} primitives)", self.canvas.len());
        self.canvas.clear();
    }

    fn rebuild_brush(&mut self) {
        self.brush = self.settings.build();
        log::info!(
            "Brush changed: {} {} size {}",
            self.brush.label(),
            self.settings.color,
            self.brush.size()
        );
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn brush(&self) -> &BrushType {
        &self.brush
    }

    pub fn settings(&self) -> BrushSettings {
        self.settings
    }

    pub fn session(&self) -> &StrokeSession {
        &self.session
    }

    /// Text for the status line
    pub fn status_label(&self) -> String {
        format!("Current Brush Type: {}", self.brush.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_default_board() {
        let board = Board::default();
        assert_eq!(board.brush().kind(), BrushKind::Pencil);
        assert_eq!(board.status_label(), "Current Brush Type: Pencil");
        assert!(board.canvas().is_empty());
        assert!(!board.session().is_drawing());
    }

    #[test]
    fn test_handle_dispatch() {
        let mut board = Board::with_jitter(BrushSettings::default(), RngJitter::seeded(5));
        assert!(!board.handle(PointerEvent::Down(pos2(0.0, 0.0))));
        assert!(board.handle(PointerEvent::Move(pos2(4.0, 0.0))));
        assert!(!board.handle(PointerEvent::Up(pos2(4.0, 0.0))));
        assert!(!board.handle(PointerEvent::Move(pos2(8.0, 0.0))));
        assert_eq!(board.canvas().len(), 1);
    }

    #[test]
    fn test_invalid_size_keeps_brush() {
        let mut board = Board::with_jitter(BrushSettings::default(), RngJitter::seeded(5));
        assert!(board.set_size(0).is_err());
        assert_eq!(board.brush().size(), 3);
    }

    #[test]
    fn test_apply_names() {
        let mut board = Board::with_jitter(BrushSettings::default(), RngJitter::seeded(5));
        board.apply_names("Star", "Blue", 6).unwrap();
        assert_eq!(board.brush().label(), "Star");
        assert_eq!(board.brush().color(), PaletteColor::Blue.color32());

        assert!(board.apply_names("Generic Brush", "Blue", 6).is_err());
        assert_eq!(board.brush().label(), "Star");
    }
}

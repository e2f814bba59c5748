use egui::Pos2;

use crate::brushes::{Brush, Segment};
use crate::jitter::Jitter;
use crate::surface::Surface;

/// State of the drag gesture feeding segments to the active brush
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StrokeSession {
    #[default]
    Idle,
    Drawing {
        last_position: Pos2,
    },
}

impl StrokeSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a gesture at `pos`
    pub fn pointer_down(&mut self, pos: Pos2) {
        *self = Self::Drawing { last_position: pos };
    }

    /// Render the segment from the last position to `pos` and advance.
    ///
    /// Returns `false` without drawing when no gesture is in progress.
    pub fn pointer_move<B>(
        &mut self,
        pos: Pos2,
        brush: &B,
        surface: &mut dyn Surface,
        jitter: &mut dyn Jitter,
    ) -> bool
    where
        B: Brush + ?Sized,
    {
        match self {
            Self::Idle => false,
            Self::Drawing { last_position } => {
                brush.render(surface, Segment::new(*last_position, pos), jitter);
                *last_position = pos;
                true
            }
        }
    }

    /// End the gesture; the next move needs a fresh pointer-down
    pub fn pointer_up(&mut self) {
        *self = Self::Idle;
    }

    pub fn last_position(&self) -> Option<Pos2> {
        match self {
            Self::Idle => None,
            Self::Drawing { last_position } => Some(*last_position),
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Drawing { .. } => "Drawing",
        }
    }
}

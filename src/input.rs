use egui::{PointerButton, Pos2, Response, Ui};

/// Pointer input in canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Pos2),
    Move(Pos2),
    Up(Pos2),
}

/// Translate the canvas widget's drag response into pointer events.
///
/// Only the primary button draws. Positions are relative to the canvas'
/// top-left corner.
pub fn collect_pointer_events(ui: &Ui, response: &Response) -> Vec<PointerEvent> {
    let origin = response.rect.min.to_vec2();
    let to_canvas = |pos: Pos2| pos - origin;
    let mut events = Vec::new();

    if response.drag_started_by(PointerButton::Primary) {
        // egui reports the drag once the pointer has moved; start from where it was pressed
        let press = ui
            .input(|input| input.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = press {
            events.push(PointerEvent::Down(to_canvas(pos)));
        }
    }

    if response.dragged_by(PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            events.push(PointerEvent::Move(to_canvas(pos)));
        }
    }

    if response.drag_stopped_by(PointerButton::Primary) {
        let pos = response
            .interact_pointer_pos()
            .or_else(|| ui.input(|input| input.pointer.latest_pos()))
            .unwrap_or(response.rect.min);
        events.push(PointerEvent::Up(to_canvas(pos)));
    }

    events
}

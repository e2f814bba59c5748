use egui::{Align, Layout, Sense, Slider};

use crate::board::Board;
use crate::brushes::BrushKind;
use crate::config::BoardConfig;
use crate::input::collect_pointer_events;
use crate::palette::{PaletteColor, BACKGROUND};
use crate::selector::{MAX_SIZE, MIN_SIZE};

/// The eframe application: control bar, status line and the canvas.
/// Nothing is persisted; the drawing is lost on close.
#[derive(Debug, Default)]
pub struct DrawingApp {
    board: Board,
}

impl DrawingApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &BoardConfig) -> Self {
        Self {
            board: Board::new(config.settings()),
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let settings = self.board.settings();

        ui.horizontal_wrapped(|ui| {
            ui.label("Brush:");
            for kind in BrushKind::ALL {
                if ui.radio(settings.kind == kind, kind.label()).clicked() {
                    self.board.select_brush(kind);
                }
            }

            ui.separator();
            ui.label("Size:");
            let mut size = settings.size;
            if ui.add(Slider::new(&mut size, MIN_SIZE..=MAX_SIZE)).changed() {
                if let Err(err) = self.board.set_size(size) {
                    log::warn!("Rejected brush size: {}", err);
                }
            }

            ui.separator();
            ui.label("Color:");
            for color in PaletteColor::ALL {
                let button = egui::Button::new(color.name())
                    .fill(color.color32())
                    .selected(settings.color == color);
                if ui.add(button).clicked() {
                    self.board.select_color(color);
                }
            }

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    self.board.clear();
                }
            });
        });
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        let rect = response.rect;

        for event in collect_pointer_events(ui, &response) {
            self.board.handle(event);
        }

        painter.rect_filled(rect, 0.0, BACKGROUND);
        self.board.canvas().paint(&painter, rect.min);
    }
}

impl eframe::App for DrawingApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(self.board.status_label());
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.canvas(ui);
            });
    }
}

#![warn(clippy::all, rust_2018_idioms)]

use drawing_board::{BoardConfig, DrawingApp};

// Room for the control bar and status line around the canvas
const CHROME_HEIGHT: f32 = 80.0;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = BoardConfig::from_env();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.canvas_width, config.canvas_height + CHROME_HEIGHT]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| Ok(Box::new(DrawingApp::new(cc, &config)))),
    )
}

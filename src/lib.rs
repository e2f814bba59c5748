#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod board;
pub mod brushes;
pub mod canvas;
pub mod config;
pub mod error;
pub mod input;
pub mod jitter;
pub mod palette;
pub mod selector;
pub mod session;
pub mod surface;

pub use app::DrawingApp;
pub use board::Board;
pub use brushes::{Brush, BrushKind, BrushType, Segment};
pub use canvas::Canvas;
pub use config::BoardConfig;
pub use error::{BoardError, BoardResult};
pub use input::PointerEvent;
pub use jitter::{Jitter, RngJitter};
pub use palette::{PaletteColor, BACKGROUND};
pub use selector::BrushSettings;
pub use session::StrokeSession;
pub use surface::{LineCap, Primitive, Surface};

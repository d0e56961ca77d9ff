//! Data model for the console.

mod color;
mod geometry;
mod output_line;

pub use color::{ColorParseError, Rgba};
pub use geometry::{FontId, Rect, Vec2, Viewport};
pub use output_line::{OutputCategory, OutputLine};

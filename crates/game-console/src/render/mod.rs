//! Render model: what the console looks like this frame.

mod projector;
mod record;
mod style;

pub use projector::{RenderProjector, caret, fade_factor};
pub use record::{BackgroundRecord, RenderFrame, RenderRecord};
pub use style::{CategoryStyle, ConsoleStyle};

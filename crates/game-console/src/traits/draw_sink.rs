//! Trait for the host's drawing backend.

use crate::render::{BackgroundRecord, RenderRecord};

/// Receives the console frame, in draw order.
///
/// [`Console::draw`](crate::Console::draw) calls `fill_background` once and
/// then `draw_text` for every record, oldest line first, live input last.
/// Implementations must not call back into the console.
pub trait DrawSink {
    /// Fill the console panel.
    fn fill_background(&mut self, background: &BackgroundRecord);

    /// Draw one line of text.
    fn draw_text(&mut self, record: &RenderRecord);
}

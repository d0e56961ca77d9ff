//! Per-frame drawable records.

use crate::model::{FontId, Rect, Rgba, Vec2};

/// One line of text ready for the draw sink.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRecord {
    /// Top-left corner of the text.
    pub position: Vec2,
    /// Text with unsupported glyphs already replaced.
    pub text: String,
    /// Final colour, fade applied.
    pub color: Rgba,
    pub font: FontId,
    pub scale: f32,
    /// Scaled pixel bounds of the text, anchored at `position`.
    pub bounds: Rect,
}

/// The console panel behind the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundRecord {
    pub rect: Rect,
    /// Background colour with the console alpha already applied.
    pub color: Rgba,
}

/// Everything the draw sink needs for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub background: BackgroundRecord,
    /// One record per stored line, oldest first.
    pub lines: Vec<RenderRecord>,
    /// The live input line with caret, present while a read is pending.
    pub input: Option<RenderRecord>,
}

impl RenderFrame {
    /// A frame with nothing but the panel.
    pub fn empty(background: BackgroundRecord) -> Self {
        Self {
            background,
            lines: Vec::new(),
            input: None,
        }
    }

    /// All text records in draw order.
    pub fn records(&self) -> impl Iterator<Item = &RenderRecord> {
        self.lines.iter().chain(self.input.iter())
    }
}

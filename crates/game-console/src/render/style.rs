//! Resolved appearance of a console.

use super::BackgroundRecord;
use crate::model::{FontId, OutputCategory, Rect, Rgba};

/// Colour and font used for one output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    pub color: Rgba,
    pub font: FontId,
}

/// Appearance settings with every default resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleStyle {
    /// Panel rectangle; text starts at its top-left corner.
    pub position: Rect,
    pub background_color: Rgba,
    /// Opacity applied to the background colour, within `[0, 1]`.
    pub alpha: f32,
    /// Colour older lines fade towards.
    pub fade_color: Rgba,
    pub text_scale: f32,
    /// Vertical pixel step between lines.
    pub line_height: f32,
    pub output: CategoryStyle,
    pub error: CategoryStyle,
    pub input: CategoryStyle,
}

impl ConsoleStyle {
    pub fn for_category(&self, category: OutputCategory) -> CategoryStyle {
        match category {
            OutputCategory::Info => self.output,
            OutputCategory::Error => self.error,
            OutputCategory::UserInput => self.input,
        }
    }

    pub fn background(&self) -> BackgroundRecord {
        BackgroundRecord {
            rect: self.position,
            color: self.background_color.scale(self.alpha),
        }
    }
}

//! Test doubles for the capability traits.

use crate::model::{FontId, Vec2};
use crate::render::{BackgroundRecord, RenderRecord};
use crate::traits::{DrawSink, GlyphMetrics};

pub(crate) const ASCII_FONT: FontId = FontId(0);
pub(crate) const WIDE_FONT: FontId = FontId(1);

/// Fixed-width fonts: 8x16 pixels per character.
///
/// `ASCII_FONT` only has printable ASCII glyphs, `WIDE_FONT` has everything.
#[derive(Debug, Default)]
pub(crate) struct MonoGlyphs;

impl GlyphMetrics for MonoGlyphs {
    fn has_font(&self, font: FontId) -> bool {
        font == ASCII_FONT || font == WIDE_FONT
    }

    fn contains_glyph(&self, font: FontId, c: char) -> bool {
        match font {
            ASCII_FONT => c.is_ascii() && !c.is_ascii_control(),
            _ => !c.is_control(),
        }
    }

    fn measure(&self, _font: FontId, text: &str) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * 8.0, 16.0)
    }

    fn line_spacing(&self, _font: FontId) -> f32 {
        16.0
    }
}

/// Draw sink that remembers what it was asked to draw.
#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    pub backgrounds: Vec<BackgroundRecord>,
    pub texts: Vec<RenderRecord>,
}

impl DrawSink for RecordingSink {
    fn fill_background(&mut self, background: &BackgroundRecord) {
        self.backgrounds.push(*background);
    }

    fn draw_text(&mut self, record: &RenderRecord) {
        self.texts.push(record.clone());
    }
}

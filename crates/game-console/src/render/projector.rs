//! Projection of console state into drawable records.

use super::{CategoryStyle, ConsoleStyle, RenderFrame, RenderRecord};
use crate::model::{OutputLine, Rect, Rgba, Vec2};
use crate::traits::GlyphMetrics;
use std::time::Duration;

/// Weight towards the fade colour for line `index` of `count`.
///
/// Older lines fade more. Index 0 has its own boundary rule, `(n-1)/n`; every
/// other line uses `(n-i-1)/n`. The two happen to agree at index 0, and the
/// newest line is never faded.
pub fn fade_factor(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let n = count as f32;
    if index == 0 {
        (n - 1.0) / n
    } else {
        count.saturating_sub(index + 1) as f32 / n
    }
}

/// Caret glyph for the live input line: `|` on even seconds, blank on odd.
pub fn caret(elapsed: Duration) -> char {
    if elapsed.as_secs() % 2 == 0 { '|' } else { ' ' }
}

/// Builds a [`RenderFrame`] from the scrollback and the live input line.
pub struct RenderProjector<'a> {
    style: &'a ConsoleStyle,
    glyphs: &'a dyn GlyphMetrics,
}

impl<'a> RenderProjector<'a> {
    pub fn new(style: &'a ConsoleStyle, glyphs: &'a dyn GlyphMetrics) -> Self {
        Self { style, glyphs }
    }

    /// Project one frame.
    ///
    /// `pending_input` is the live input text while a read is pending;
    /// `elapsed` is the total running time, used for the caret blink.
    pub fn project(
        &self,
        lines: &[OutputLine],
        pending_input: Option<&str>,
        elapsed: Duration,
    ) -> RenderFrame {
        let count = lines.len();
        let records = lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                let style = self.style.for_category(line.category());
                let color = style
                    .color
                    .lerp(self.style.fade_color, fade_factor(index, count));
                self.record(index, line.text(), style, color)
            })
            .collect();

        let input = pending_input.map(|text| {
            let style = self.style.input;
            let text = format!("{text}{}", caret(elapsed));
            self.record(count, &text, style, style.color)
        });

        RenderFrame {
            background: self.style.background(),
            lines: records,
            input,
        }
    }

    fn record(&self, index: usize, text: &str, style: CategoryStyle, color: Rgba) -> RenderRecord {
        let text = self.substitute_missing_glyphs(style, text);
        let origin = self.style.position.origin();
        let position = Vec2::new(origin.x, origin.y + index as f32 * self.style.line_height);

        let size = self.glyphs.measure(style.font, &text);
        let scale = self.style.text_scale;
        let bounds = Rect::new(
            position.x as i32,
            position.y as i32,
            (size.x * scale).max(0.0) as u32,
            (size.y * scale).max(0.0) as u32,
        );

        RenderRecord {
            position,
            text,
            color,
            font: style.font,
            scale,
            bounds,
        }
    }

    /// Replace characters the font cannot draw with a space. Line breaks are kept.
    fn substitute_missing_glyphs(&self, style: CategoryStyle, text: &str) -> String {
        text.chars()
            .map(|c| {
                if c == '\r' || c == '\n' || self.glyphs.contains_glyph(style.font, c) {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }
}

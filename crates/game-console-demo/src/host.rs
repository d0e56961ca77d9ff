//! Terminal implementations of the console capabilities.
//!
//! One console pixel is one terminal cell, so the console runs with a text
//! scale and line height of 1.

use game_console::{
    BackgroundRecord, ClipboardProvider, ConsoleConfig, DrawSink, FontId, GlyphMetrics, Rect,
    RenderRecord, Rgba, Vec2, Viewport,
};
use ratatui::buffer::Buffer;
use ratatui::layout;
use ratatui::style::{Color, Style};
use std::sync::{Mutex, PoisonError};

/// The terminal's only font.
pub const TERMINAL_FONT: FontId = FontId(0);

/// Console panel for a terminal: a third of the width, anchored bottom-right,
/// one row per scrollback line plus a row for the live input line.
pub fn panel_rect(viewport: Viewport, line_count: usize) -> Rect {
    let rows = u32::try_from(line_count).unwrap_or(u32::MAX).saturating_add(1);
    Rect::bottom_right(viewport, viewport.width / 3, rows.min(viewport.height))
}

/// `config` adjusted for a terminal of `viewport` cells.
pub fn terminal_config(mut config: ConsoleConfig, viewport: Viewport) -> ConsoleConfig {
    config.text_scale = 1.0;
    config.line_height = 1.0;
    config.position = Some(panel_rect(viewport, config.line_count));
    config
}

/// Cell-based metrics: every printable character is one cell wide.
#[derive(Debug, Default)]
pub struct TerminalGlyphs;

impl GlyphMetrics for TerminalGlyphs {
    fn has_font(&self, font: FontId) -> bool {
        font == TERMINAL_FONT
    }

    fn contains_glyph(&self, _font: FontId, c: char) -> bool {
        !c.is_control()
    }

    fn measure(&self, _font: FontId, text: &str) -> Vec2 {
        Vec2::new(text.chars().filter(|c| !c.is_control()).count() as f32, 1.0)
    }

    fn line_spacing(&self, _font: FontId) -> f32 {
        1.0
    }
}

/// Text handed over by the terminal's bracketed paste, served on Ctrl+V.
#[derive(Debug, Default)]
pub struct PasteBuffer {
    text: Mutex<Option<String>>,
}

impl PasteBuffer {
    pub fn stash(&self, text: String) {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text);
    }
}

impl ClipboardProvider for PasteBuffer {
    fn text(&self) -> Option<String> {
        self.text.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

/// Terminal colour for a console colour, alpha blended over black.
pub fn to_color(color: Rgba) -> Color {
    let blend = |channel: u8| (channel as u16 * color.a as u16 / 255) as u8;
    Color::Rgb(blend(color.r), blend(color.g), blend(color.b))
}

fn clamp_u16(value: i64) -> u16 {
    value.clamp(0, u16::MAX as i64) as u16
}

/// Draws console records into a ratatui buffer.
pub struct TerminalSink<'a> {
    buf: &'a mut Buffer,
}

impl<'a> TerminalSink<'a> {
    pub fn new(buf: &'a mut Buffer) -> Self {
        Self { buf }
    }
}

impl DrawSink for TerminalSink<'_> {
    fn fill_background(&mut self, background: &BackgroundRecord) {
        if background.color.a == 0 {
            return;
        }
        let rect = background.rect;
        let cells = layout::Rect::new(
            clamp_u16(rect.x as i64),
            clamp_u16(rect.y as i64),
            clamp_u16(rect.width as i64),
            clamp_u16(rect.height as i64),
        )
        .intersection(self.buf.area);

        let color = to_color(background.color);
        for y in cells.top()..cells.bottom() {
            for x in cells.left()..cells.right() {
                if let Some(cell) = self.buf.cell_mut((x, y)) {
                    cell.set_bg(color);
                }
            }
        }
    }

    fn draw_text(&mut self, record: &RenderRecord) {
        let area = self.buf.area;
        let x = record.position.x as i64;
        let y = record.position.y as i64;
        if x < area.left() as i64
            || x >= area.right() as i64
            || y < area.top() as i64
            || y >= area.bottom() as i64
        {
            return;
        }

        let text: String = record.text.chars().filter(|c| !c.is_control()).collect();
        let width = area.right() as usize - x as usize;
        self.buf.set_stringn(
            x as u16,
            y as u16,
            text,
            width,
            Style::default().fg(to_color(record.color)),
        );
    }
}

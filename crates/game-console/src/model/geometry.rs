//! Screen-space primitives.

use serde::{Deserialize, Serialize};

/// A point in pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left corner as a point.
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    /// Rectangle of `width` x `height` anchored to the bottom-right corner of
    /// the viewport.
    pub fn bottom_right(viewport: Viewport, width: u32, height: u32) -> Self {
        Self {
            x: viewport.width as i32 - width as i32,
            y: viewport.height as i32 - height as i32,
            width,
            height,
        }
    }
}

/// Size of the host's drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Opaque font selector. What a font id means is up to the
/// [`GlyphMetrics`](crate::traits::GlyphMetrics) implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(pub u32);

//! Trait for text measurement and glyph availability.

use crate::model::{FontId, Vec2};

/// Provides font metrics to the console.
///
/// The console never rasterizes text. It only needs to know which fonts
/// exist, which characters a font can draw, and how large a string is. The
/// host injects an implementation backed by its real font system.
///
/// # Example
///
/// ```ignore
/// use game_console::{FontId, GlyphMetrics, Vec2};
///
/// struct SpriteFonts {
///     fonts: HashMap<FontId, SpriteFont>,
/// }
///
/// impl GlyphMetrics for SpriteFonts {
///     fn has_font(&self, font: FontId) -> bool {
///         self.fonts.contains_key(&font)
///     }
///
///     fn contains_glyph(&self, font: FontId, c: char) -> bool {
///         self.fonts[&font].characters.contains(&c)
///     }
///
///     fn measure(&self, font: FontId, text: &str) -> Vec2 {
///         self.fonts[&font].measure_string(text)
///     }
///
///     fn line_spacing(&self, font: FontId) -> f32 {
///         self.fonts[&font].line_spacing
///     }
/// }
/// ```
pub trait GlyphMetrics: Send + Sync {
    /// Whether `font` is a font this implementation knows about.
    fn has_font(&self, font: FontId) -> bool;

    /// Whether `font` can draw `c`.
    fn contains_glyph(&self, font: FontId, c: char) -> bool;

    /// Unscaled pixel size of `text` drawn with `font`.
    fn measure(&self, font: FontId, text: &str) -> Vec2;

    /// Unscaled distance between two baselines.
    fn line_spacing(&self, font: FontId) -> f32;
}

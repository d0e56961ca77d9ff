//! Capability traits the host implements to plug the console into its platform.

mod clipboard;
mod draw_sink;
mod glyph_metrics;
mod input_receiver;

pub use clipboard::{ClipboardProvider, NoClipboard};
pub use draw_sink::DrawSink;
pub use glyph_metrics::GlyphMetrics;
pub use input_receiver::InputReceiver;

//! # game-console
//!
//! An in-process developer console overlay for real-time rendered
//! applications: a bounded scrollback of coloured output lines, a line input
//! mode, and a per-frame render model.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**. It never rasterizes text, hooks window
//! messages or touches the clipboard itself. The host supplies those through
//! the capability traits in [`traits`], drives the console once per frame,
//! and receives [`ConsoleEvent`]s back.
//!
//! - [`Console`] is owned by the host. Call [`Console::update`] then
//!   [`Console::draw`] every frame.
//! - [`ConsoleHandle`] is a cloneable producer handle for any thread.
//! - [`KeyboardDispatcher`] turns raw characters into [`InputAction`]s.
//! - [`OutputWriter`] / [`InputReader`] stand in for the standard streams,
//!   [`ConsoleLogger`] for a `log` backend.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use game_console::{Console, ConsoleConfig, OutputCategory, Viewport};
//!
//! let mut console = Console::builder()
//!     .config(ConsoleConfig::load())
//!     .glyphs(Arc::new(my_fonts))
//!     .viewport(Viewport::new(1920, 1080))
//!     .build()?;
//!
//! console.write_line("Hello world!", OutputCategory::Info);
//!
//! // every frame
//! for event in console.update(game_time.total()) {
//!     // ConsoleEvent::InputCommitted(line) => run the command
//! }
//! console.draw(&mut sprite_batch);
//! ```

pub mod action;
pub mod config;
pub mod console;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod logger;
pub mod model;
pub mod render;
pub mod state;
pub mod streams;
pub mod traits;

#[cfg(test)]
mod testing;

// Re-export commonly used types
pub use action::{InputAction, SpecialKey};
pub use config::ConsoleConfig;
pub use console::{Console, ConsoleBuilder, ConsoleHandle};
pub use dispatcher::{KeyboardDispatcher, PASTE};
pub use error::ConsoleError;
pub use event::ConsoleEvent;
pub use logger::ConsoleLogger;
pub use model::{
    ColorParseError, FontId, OutputCategory, OutputLine, Rect, Rgba, Vec2, Viewport,
};
pub use render::{
    BackgroundRecord, CategoryStyle, ConsoleStyle, RenderFrame, RenderProjector, RenderRecord,
};
pub use state::{BACKSPACE, ConsoleEngine, ConsoleState, InputEditor, LineStore};
pub use streams::{InputReader, OutputWriter};
pub use traits::{ClipboardProvider, DrawSink, GlyphMetrics, InputReceiver, NoClipboard};

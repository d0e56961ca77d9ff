//! The host-owned console and its producer handle.
//!
//! A [`Console`] is created once by the host and ticked every frame:
//! `update` then `draw`. Everything that produces output or input (stream
//! adapters, the logger, the keyboard dispatcher) talks to it through a
//! cloneable [`ConsoleHandle`], which may live on any thread.

use crate::action::{InputAction, SpecialKey};
use crate::config::{self, ConsoleConfig};
use crate::error::ConsoleError;
use crate::event::ConsoleEvent;
use crate::model::{FontId, OutputCategory, OutputLine, Rect, Rgba, Viewport};
use crate::render::{CategoryStyle, ConsoleStyle, RenderFrame, RenderProjector};
use crate::state::{ConsoleEngine, ConsoleState};
use crate::traits::{DrawSink, GlyphMetrics, InputReceiver};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::sync::oneshot;

fn lock(engine: &Mutex<ConsoleEngine>) -> MutexGuard<'_, ConsoleEngine> {
    // every engine mutation is total, so a poisoned lock still holds a valid engine
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builder for [`Console`].
///
/// A glyph capability is always required. A viewport is required unless the
/// configuration carries an explicit position.
pub struct ConsoleBuilder {
    config: ConsoleConfig,
    glyphs: Option<Arc<dyn GlyphMetrics>>,
    viewport: Option<Viewport>,
    default_font: FontId,
}

impl Default for ConsoleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleBuilder {
    pub fn new() -> Self {
        Self {
            config: ConsoleConfig::default(),
            glyphs: None,
            viewport: None,
            default_font: FontId::default(),
        }
    }

    pub fn config(mut self, config: ConsoleConfig) -> Self {
        self.config = config;
        self
    }

    pub fn glyphs(mut self, glyphs: Arc<dyn GlyphMetrics>) -> Self {
        self.glyphs = Some(glyphs);
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = Some(viewport);
        self
    }

    /// Font used for every category without an explicit font.
    pub fn default_font(mut self, font: FontId) -> Self {
        self.default_font = font;
        self
    }

    pub fn build(self) -> Result<Console, ConsoleError> {
        let config = self.config;
        config.validate()?;

        let glyphs = self
            .glyphs
            .ok_or(ConsoleError::MissingDependency("glyph metrics"))?;

        let resolve = |font: Option<FontId>, what: &'static str| {
            let font = font.unwrap_or(self.default_font);
            if glyphs.has_font(font) {
                Ok(font)
            } else {
                Err(ConsoleError::MissingDependency(what))
            }
        };
        let output_font = resolve(config.output_font, "output font")?;
        let error_font = resolve(config.error_font, "error font")?;
        let input_font = resolve(config.input_font, "input font")?;
        let default_font = resolve(None, "default font")?;

        let position = match (config.position, self.viewport) {
            (Some(position), _) => position,
            (None, Some(viewport)) => {
                let width = viewport.width / 3;
                let height = config.line_count as f32
                    * glyphs.line_spacing(default_font)
                    * config.text_scale;
                Rect::bottom_right(viewport, width, height.max(0.0) as u32)
            }
            (None, None) => return Err(ConsoleError::MissingDependency("viewport")),
        };

        let style = ConsoleStyle {
            position,
            background_color: config.background_color,
            alpha: config.alpha,
            fade_color: config.fade_color,
            text_scale: config.text_scale,
            line_height: config.line_height,
            output: CategoryStyle {
                color: config.output_color,
                font: output_font,
            },
            error: CategoryStyle {
                color: config.error_color,
                font: error_font,
            },
            input: CategoryStyle {
                color: config.input_color,
                font: input_font,
            },
        };

        log::debug!(
            "Console built: {} lines at {:?}, scale {}",
            config.line_count,
            position,
            config.text_scale
        );

        Ok(Console {
            engine: Arc::new(Mutex::new(ConsoleEngine::new())),
            glyphs,
            frame: RenderFrame::empty(style.background()),
            style,
            line_count: config.line_count,
        })
    }
}

/// An in-process developer console.
///
/// Owned by the host. Call [`Console::update`] once per frame, then
/// [`Console::draw`]. Drawing before the first update is allowed and only
/// draws the background panel.
pub struct Console {
    engine: Arc<Mutex<ConsoleEngine>>,
    glyphs: Arc<dyn GlyphMetrics>,
    style: ConsoleStyle,
    line_count: usize,
    frame: RenderFrame,
}

impl Console {
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::new()
    }

    /// A producer handle for other threads and adapters.
    pub fn handle(&self) -> ConsoleHandle {
        ConsoleHandle {
            engine: Arc::downgrade(&self.engine),
        }
    }

    /// Run one tick and rebuild the render frame.
    ///
    /// `elapsed` is the total running time of the host; it drives the caret
    /// blink of the live input line.
    pub fn update(&mut self, elapsed: Duration) -> Vec<ConsoleEvent> {
        let (events, lines, pending) = {
            let mut engine = lock(&self.engine);
            let events = engine.update(self.line_count);
            let pending = (engine.state() == ConsoleState::Reading)
                .then(|| engine.editor().text().to_string());
            (events, engine.lines().to_vec(), pending)
        };

        self.frame = RenderProjector::new(&self.style, self.glyphs.as_ref()).project(
            &lines,
            pending.as_deref(),
            elapsed,
        );

        for event in &events {
            match event {
                ConsoleEvent::InputCommitted(text) => {
                    log::debug!("Input committed ({} chars)", text.chars().count())
                }
                ConsoleEvent::CommitDiscarded => {
                    log::debug!("Enter pressed while no read was pending, ignored")
                }
                ConsoleEvent::LinesEvicted(count) => log::trace!("Evicted {} lines", count),
            }
        }

        events
    }

    /// Hand the current frame to the draw sink: background first, then the
    /// lines oldest first, then the live input line.
    pub fn draw(&self, sink: &mut dyn DrawSink) {
        sink.fill_background(&self.frame.background);
        for record in self.frame.records() {
            sink.draw_text(record);
        }
    }

    /// The frame built by the last update.
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn state(&self) -> ConsoleState {
        lock(&self.engine).state()
    }

    /// Snapshot of the scrollback, oldest first.
    pub fn lines(&self) -> Vec<OutputLine> {
        lock(&self.engine).lines().to_vec()
    }

    /// Text typed so far on the input line.
    pub fn pending_input(&self) -> String {
        lock(&self.engine).editor().text().to_string()
    }

    pub fn write(&self, text: &str, category: OutputCategory) {
        lock(&self.engine).write(text, category);
    }

    pub fn write_line(&self, text: impl Into<String>, category: OutputCategory) {
        lock(&self.engine).write_line(text, category);
    }

    pub fn clear(&self) {
        lock(&self.engine).clear();
    }

    /// Start reading a line. The committed text shows up as a
    /// [`ConsoleEvent::InputCommitted`] from `update`.
    pub fn begin_read(&self) {
        let started = lock(&self.engine).begin_read();
        if started {
            log::debug!("Line read started");
        }
    }

    pub fn style(&self) -> &ConsoleStyle {
        &self.style
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Change the scrollback capacity. Takes effect on the next update.
    pub fn set_line_count(&mut self, line_count: usize) {
        self.line_count = line_count;
    }

    pub fn set_position(&mut self, position: Rect) {
        self.style.position = position;
        self.frame.background = self.style.background();
    }

    pub fn set_background_color(&mut self, color: Rgba) {
        self.style.background_color = color;
        self.frame.background = self.style.background();
    }

    pub fn set_alpha(&mut self, alpha: f32) -> Result<(), ConsoleError> {
        config::check_alpha(alpha)?;
        self.style.alpha = alpha;
        self.frame.background = self.style.background();
        Ok(())
    }

    pub fn set_fade_color(&mut self, color: Rgba) {
        self.style.fade_color = color;
    }

    pub fn set_text_scale(&mut self, scale: f32) -> Result<(), ConsoleError> {
        config::check_text_scale(scale)?;
        self.style.text_scale = scale;
        Ok(())
    }

    pub fn set_line_height(&mut self, height: f32) -> Result<(), ConsoleError> {
        config::check_line_height(height)?;
        self.style.line_height = height;
        Ok(())
    }

    pub fn set_output_color(&mut self, color: Rgba) {
        self.style.output.color = color;
    }

    pub fn set_error_color(&mut self, color: Rgba) {
        self.style.error.color = color;
    }

    pub fn set_input_color(&mut self, color: Rgba) {
        self.style.input.color = color;
    }

    pub fn set_output_font(&mut self, font: FontId) -> Result<(), ConsoleError> {
        self.style.output.font = self.known_font(font, "output font")?;
        Ok(())
    }

    pub fn set_error_font(&mut self, font: FontId) -> Result<(), ConsoleError> {
        self.style.error.font = self.known_font(font, "error font")?;
        Ok(())
    }

    pub fn set_input_font(&mut self, font: FontId) -> Result<(), ConsoleError> {
        self.style.input.font = self.known_font(font, "input font")?;
        Ok(())
    }

    fn known_font(&self, font: FontId, what: &'static str) -> Result<FontId, ConsoleError> {
        if self.glyphs.has_font(font) {
            Ok(font)
        } else {
            Err(ConsoleError::MissingDependency(what))
        }
    }
}

/// Cloneable, thread-safe access to a [`Console`].
///
/// The handle does not keep the console alive. Once the console is dropped
/// every call fails with [`ConsoleError::NotAttached`].
#[derive(Debug, Clone, Default)]
pub struct ConsoleHandle {
    engine: Weak<Mutex<ConsoleEngine>>,
}

impl ConsoleHandle {
    /// A handle that is not attached to any console.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn is_attached(&self) -> bool {
        self.engine.strong_count() > 0
    }

    fn with<R>(&self, f: impl FnOnce(&mut ConsoleEngine) -> R) -> Result<R, ConsoleError> {
        let engine = self.engine.upgrade().ok_or(ConsoleError::NotAttached)?;
        let mut guard = lock(&engine);
        Ok(f(&mut guard))
    }

    /// Merge-aware write: joins the tail line if it has the same category.
    pub fn write(&self, text: &str, category: OutputCategory) -> Result<(), ConsoleError> {
        self.with(|engine| engine.write(text, category))
    }

    /// Append a complete line.
    pub fn write_line(
        &self,
        text: impl Into<String>,
        category: OutputCategory,
    ) -> Result<(), ConsoleError> {
        let text = text.into();
        self.with(|engine| engine.write_line(text, category))
    }

    /// Write stream text, where `\n` ends the current line.
    pub fn write_stream(&self, text: &str, category: OutputCategory) -> Result<(), ConsoleError> {
        self.with(|engine| engine.write_stream(text, category))
    }

    /// Drop every scrollback line.
    pub fn clear(&self) -> Result<(), ConsoleError> {
        self.with(ConsoleEngine::clear)
    }

    /// Enter Reading. Returns `false` if a read was already pending.
    pub fn begin_read(&self) -> Result<bool, ConsoleError> {
        let started = self.with(ConsoleEngine::begin_read)?;
        if started {
            log::debug!("Line read started");
        }
        Ok(started)
    }

    /// Begin (or join) a read; the receiver resolves when the line is
    /// committed by a tick.
    pub fn subscribe_line(&self) -> Result<oneshot::Receiver<String>, ConsoleError> {
        self.with(ConsoleEngine::subscribe_line)
    }

    pub fn state(&self) -> Result<ConsoleState, ConsoleError> {
        self.with(|engine| engine.state())
    }

    pub fn pending_input(&self) -> Result<String, ConsoleError> {
        self.with(|engine| engine.editor().text().to_string())
    }
}

impl InputReceiver for ConsoleHandle {
    fn receive(&self, input: InputAction) -> Result<(), ConsoleError> {
        match input {
            InputAction::CharacterTyped(c) => self.with(|engine| engine.editor_mut().append_char(c)),
            InputAction::TextInserted(text) => {
                self.with(|engine| engine.editor_mut().append_text(&text))
            }
            InputAction::ControlCommand(c) => {
                let applied = self.with(|engine| engine.editor_mut().apply_command(c))?;
                if !applied {
                    log::trace!("Ignoring control character {:?}", c);
                }
                Ok(())
            }
            InputAction::SpecialKey(SpecialKey::Enter) => {
                self.with(|engine| engine.editor_mut().request_commit())
            }
            InputAction::SpecialKey(_) => {
                // only checks attachment; other keys have no console meaning
                self.with(|_| ())
            }
        }
    }

    fn focus_changed(&self, focused: bool) {
        log::trace!("Console input focus: {}", focused);
    }
}

//! The console state machine.
//!
//! `ConsoleEngine` owns the scrollback, the pending input line and the
//! Idle / Writing / Reading state, and runs the per-tick update:
//!
//! 1. Reading with a commit requested: flush the input as a `UserInput` line,
//!    resolve pending readers, go Idle.
//! 2. Evict lines above capacity.
//! 3. Writing reverts to Idle.
//!
//! The engine does no logging. It lives behind the console mutex, and the
//! console logger writes into that same mutex.

use super::{InputEditor, LineStore};
use crate::event::ConsoleEvent;
use crate::model::{OutputCategory, OutputLine};
use tokio::sync::oneshot;

/// What the console is currently doing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleState {
    /// Nothing pending.
    #[default]
    Idle,
    /// Output was written since the last tick. Lasts until the tick ends.
    Writing,
    /// A line read is pending. Lasts until a commit is flushed.
    Reading,
}

/// Scrollback + input line + state, mutated by producers and ticked by the host.
#[derive(Debug, Default)]
pub struct ConsoleEngine {
    store: LineStore,
    editor: InputEditor,
    state: ConsoleState,
    /// A stream newline terminated the tail line; the next stream text opens a new one.
    tail_closed: bool,
    readers: Vec<oneshot::Sender<String>>,
}

impl ConsoleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConsoleState {
        self.state
    }

    pub fn lines(&self) -> &[OutputLine] {
        self.store.lines()
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn editor(&self) -> &InputEditor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut InputEditor {
        &mut self.editor
    }

    /// Writing never replaces Reading: a pending read survives output.
    fn mark_writing(&mut self) {
        if self.state != ConsoleState::Reading {
            self.state = ConsoleState::Writing;
        }
    }

    /// Merge-aware write (`appendOrMerge`).
    pub fn write(&mut self, text: &str, category: OutputCategory) {
        self.store.append_or_merge(text, category);
        self.tail_closed = false;
        self.mark_writing();
    }

    /// Write a complete line.
    pub fn write_line(&mut self, text: impl Into<String>, category: OutputCategory) {
        self.store.append(text, category);
        self.tail_closed = false;
        self.mark_writing();
    }

    /// Write text coming from a character stream.
    ///
    /// Runs of text between newlines merge like [`ConsoleEngine::write`]; a
    /// newline closes the tail line, and a newline on an already closed (or
    /// foreign) tail produces a blank line.
    pub fn write_stream(&mut self, text: &str, category: OutputCategory) {
        let mut segments = text.split('\n').peekable();
        while let Some(segment) = segments.next() {
            if !segment.is_empty() {
                if self.tail_closed {
                    self.store.append(segment, category);
                } else {
                    self.store.append_or_merge(segment, category);
                }
                self.tail_closed = false;
            }

            // every segment but the last was followed by '\n'
            if segments.peek().is_some() {
                let open_tail = !self.tail_closed
                    && self.store.last().map(OutputLine::category) == Some(category);
                if !open_tail {
                    self.store.append("", category);
                }
                self.tail_closed = true;
            }
        }
        self.mark_writing();
    }

    /// Drop every scrollback line. State and pending input are untouched.
    pub fn clear(&mut self) {
        self.store.clear();
        self.tail_closed = false;
    }

    /// Enter Reading. Returns `false` if a read was already pending.
    pub fn begin_read(&mut self) -> bool {
        if self.state == ConsoleState::Reading {
            return false;
        }
        self.state = ConsoleState::Reading;
        true
    }

    /// Begin (or join) a read and get notified with the committed text.
    pub fn subscribe_line(&mut self) -> oneshot::Receiver<String> {
        self.begin_read();
        let (tx, rx) = oneshot::channel();
        self.readers.push(tx);
        rx
    }

    /// Run one tick with the given line capacity.
    pub fn update(&mut self, capacity: usize) -> Vec<ConsoleEvent> {
        let mut events = Vec::new();

        if self.editor.commit_requested() {
            if self.state == ConsoleState::Reading {
                let text = self.editor.take_committed();
                self.store.append(text.clone(), OutputCategory::UserInput);
                self.tail_closed = false;
                self.state = ConsoleState::Idle;
                for reader in self.readers.drain(..) {
                    // a dropped receiver just means nobody waits any more
                    let _ = reader.send(text.clone());
                }
                events.push(ConsoleEvent::InputCommitted(text));
            } else {
                self.editor.cancel_commit();
                events.push(ConsoleEvent::CommitDiscarded);
            }
        }

        let evicted = self.store.trim_to_capacity(capacity);
        if evicted > 0 {
            events.push(ConsoleEvent::LinesEvicted(evicted));
        }

        if self.state == ConsoleState::Writing {
            self.state = ConsoleState::Idle;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(engine: &ConsoleEngine) -> Vec<(&str, OutputCategory)> {
        engine
            .lines()
            .iter()
            .map(|l| (l.text(), l.category()))
            .collect()
    }

    #[test]
    fn test_commit_round_trip() {
        let mut engine = ConsoleEngine::new();
        engine.begin_read();
        engine.editor_mut().append_text("hi");
        engine.editor_mut().request_commit();

        let events = engine.update(10);

        assert_eq!(events, vec![ConsoleEvent::InputCommitted("hi".to_string())]);
        assert_eq!(
            engine.store().last(),
            Some(&OutputLine::new("hi", OutputCategory::UserInput))
        );
        assert_eq!(engine.state(), ConsoleState::Idle);
        assert!(engine.editor().is_empty());
    }

    #[test]
    fn test_reading_persists_until_commit() {
        let mut engine = ConsoleEngine::new();
        assert!(engine.begin_read());
        engine.editor_mut().append_text("partial");

        for _ in 0..3 {
            engine.update(10);
            assert_eq!(engine.state(), ConsoleState::Reading);
        }
        assert_eq!(engine.editor().text(), "partial");
    }

    #[test]
    fn test_begin_read_is_idempotent() {
        let mut engine = ConsoleEngine::new();
        assert!(engine.begin_read());
        engine.editor_mut().append_text("keep");

        assert!(!engine.begin_read());
        assert_eq!(engine.state(), ConsoleState::Reading);
        assert_eq!(engine.editor().text(), "keep");
    }

    #[test]
    fn test_writing_reverts_at_tick_end() {
        let mut engine = ConsoleEngine::new();
        engine.write("a", OutputCategory::Info);
        assert_eq!(engine.state(), ConsoleState::Writing);

        engine.update(10);
        assert_eq!(engine.state(), ConsoleState::Idle);

        engine.write_line("b", OutputCategory::Error);
        assert_eq!(engine.state(), ConsoleState::Writing);
        engine.update(10);
        assert_eq!(engine.state(), ConsoleState::Idle);
    }

    #[test]
    fn test_write_does_not_interrupt_reading() {
        let mut engine = ConsoleEngine::new();
        engine.begin_read();
        engine.write_line("log", OutputCategory::Info);

        assert_eq!(engine.state(), ConsoleState::Reading);
        engine.update(10);
        assert_eq!(engine.state(), ConsoleState::Reading);
    }

    #[test]
    fn test_commit_outside_reading_is_discarded() {
        let mut engine = ConsoleEngine::new();
        engine.editor_mut().append_text("typed early");
        engine.editor_mut().request_commit();

        let events = engine.update(10);
        assert_eq!(events, vec![ConsoleEvent::CommitDiscarded]);
        assert!(engine.lines().is_empty());
        assert_eq!(engine.editor().text(), "typed early");

        // a later read does not auto-commit on the stale Enter
        engine.begin_read();
        engine.update(10);
        assert_eq!(engine.state(), ConsoleState::Reading);
    }

    #[test]
    fn test_update_evicts_after_flush() {
        let mut engine = ConsoleEngine::new();
        for text in ["a", "b", "c"] {
            engine.write_line(text, OutputCategory::Info);
        }
        engine.begin_read();
        engine.editor_mut().append_text("d");
        engine.editor_mut().request_commit();

        let events = engine.update(3);
        assert_eq!(
            events,
            vec![
                ConsoleEvent::InputCommitted("d".to_string()),
                ConsoleEvent::LinesEvicted(1),
            ]
        );
        assert_eq!(
            texts(&engine),
            vec![
                ("b", OutputCategory::Info),
                ("c", OutputCategory::Info),
                ("d", OutputCategory::UserInput),
            ]
        );
    }

    #[test]
    fn test_readers_resolved_on_flush() {
        let mut engine = ConsoleEngine::new();
        let mut first = engine.subscribe_line();
        let mut second = engine.subscribe_line();
        assert_eq!(engine.state(), ConsoleState::Reading);

        engine.editor_mut().append_text("go");
        assert!(first.try_recv().is_err());

        engine.editor_mut().request_commit();
        engine.update(10);

        assert_eq!(first.try_recv().ok(), Some("go".to_string()));
        assert_eq!(second.try_recv().ok(), Some("go".to_string()));
    }

    #[test]
    fn test_clear_keeps_pending_read() {
        let mut engine = ConsoleEngine::new();
        engine.write_line("old", OutputCategory::Info);
        engine.begin_read();
        engine.editor_mut().append_text("cmd");

        engine.clear();

        assert!(engine.lines().is_empty());
        assert_eq!(engine.state(), ConsoleState::Reading);
        assert_eq!(engine.editor().text(), "cmd");
    }

    #[test]
    fn test_stream_merges_until_newline() {
        let mut engine = ConsoleEngine::new();
        engine.write_stream("Hello ", OutputCategory::Info);
        engine.write_stream("world\n", OutputCategory::Info);
        engine.write_stream("next", OutputCategory::Info);

        assert_eq!(
            texts(&engine),
            vec![
                ("Hello world", OutputCategory::Info),
                ("next", OutputCategory::Info),
            ]
        );
    }

    #[test]
    fn test_stream_blank_lines() {
        let mut engine = ConsoleEngine::new();
        engine.write_stream("a\n\nb", OutputCategory::Info);
        engine.write_stream("\n", OutputCategory::Error);

        assert_eq!(
            texts(&engine),
            vec![
                ("a", OutputCategory::Info),
                ("", OutputCategory::Info),
                ("b", OutputCategory::Info),
                ("", OutputCategory::Error),
            ]
        );
    }

    #[test]
    fn test_stream_category_switch() {
        let mut engine = ConsoleEngine::new();
        engine.write_stream("Hello world!\n", OutputCategory::Info);
        engine.write_stream("Hello ", OutputCategory::Error);
        engine.write_stream("error!", OutputCategory::Error);
        engine.write_stream("Press keys!", OutputCategory::Info);

        assert_eq!(
            texts(&engine),
            vec![
                ("Hello world!", OutputCategory::Info),
                ("Hello error!", OutputCategory::Error),
                ("Press keys!", OutputCategory::Info),
            ]
        );
    }
}

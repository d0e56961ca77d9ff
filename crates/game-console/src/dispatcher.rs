//! Keyboard dispatcher
//!
//! Platform adapters feed raw characters and key-down events in here. The
//! dispatcher classifies them into [`InputAction`]s and routes them to the
//! one receiver that currently has focus.

use crate::action::{InputAction, SpecialKey};
use crate::error::ConsoleError;
use crate::traits::{ClipboardProvider, InputReceiver};
use std::sync::{Arc, PoisonError, RwLock};
use std::thread;

/// Ctrl+V as delivered in a character message.
pub const PASTE: char = '\u{16}';

/// Classifies raw keyboard input and forwards it to a focused receiver.
pub struct KeyboardDispatcher {
    receiver: RwLock<Option<Arc<dyn InputReceiver>>>,
    clipboard: Arc<dyn ClipboardProvider>,
}

impl KeyboardDispatcher {
    pub fn new(clipboard: Arc<dyn ClipboardProvider>) -> Self {
        Self {
            receiver: RwLock::new(None),
            clipboard,
        }
    }

    /// Move focus to `receiver` (or to nobody).
    ///
    /// The previous receiver is told it lost focus, the new one that it
    /// gained it.
    pub fn set_receiver(&self, receiver: Option<Arc<dyn InputReceiver>>) {
        let previous = {
            let mut slot = self.receiver.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *slot, receiver.clone())
        };

        if let Some(previous) = previous {
            previous.focus_changed(false);
        }
        if let Some(receiver) = receiver {
            receiver.focus_changed(true);
        }
        log::debug!("Keyboard receiver changed");
    }

    pub fn has_receiver(&self) -> bool {
        self.current().is_some()
    }

    fn current(&self) -> Option<Arc<dyn InputReceiver>> {
        self.receiver
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Handle a character message.
    ///
    /// Ctrl+V pastes the clipboard text, other control characters become
    /// [`InputAction::ControlCommand`], anything else is typed text.
    pub fn on_char(&self, c: char) -> Result<(), ConsoleError> {
        let action = match c {
            PASTE => match self.paste() {
                Some(text) => InputAction::TextInserted(text),
                None => return Ok(()),
            },
            c if c.is_control() => InputAction::ControlCommand(c),
            c => InputAction::CharacterTyped(c),
        };
        self.send(action)
    }

    /// Handle a key-down message for a non-character key.
    pub fn on_key_down(&self, key: SpecialKey) -> Result<(), ConsoleError> {
        self.send(InputAction::SpecialKey(key))
    }

    fn send(&self, action: InputAction) -> Result<(), ConsoleError> {
        match self.current() {
            Some(receiver) => receiver.receive(action),
            None => {
                log::trace!("No keyboard receiver, dropping {:?}", action);
                Ok(())
            }
        }
    }

    /// Read the clipboard on a dedicated thread and wait for it.
    fn paste(&self) -> Option<String> {
        let clipboard = &self.clipboard;
        let result = thread::scope(|scope| scope.spawn(|| clipboard.text()).join());
        match result {
            Ok(Some(text)) => {
                log::debug!("Pasting {} chars from clipboard", text.chars().count());
                Some(text)
            }
            Ok(None) => None,
            Err(_) => {
                log::warn!("Clipboard provider panicked, paste ignored");
                None
            }
        }
    }
}

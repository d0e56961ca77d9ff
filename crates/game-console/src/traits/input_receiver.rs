//! Trait for anything that accepts classified keyboard input.

use crate::action::InputAction;
use crate::error::ConsoleError;

/// Target of a [`KeyboardDispatcher`](crate::KeyboardDispatcher).
///
/// Input may arrive on a platform callback thread, so receivers must be
/// `Send + Sync` and must not assume they run on the thread that ticks the
/// console.
pub trait InputReceiver: Send + Sync {
    /// Handle one classified input.
    fn receive(&self, input: InputAction) -> Result<(), ConsoleError>;

    /// Called when the receiver gains or loses keyboard focus.
    fn focus_changed(&self, _focused: bool) {}
}

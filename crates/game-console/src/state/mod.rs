//! Console state: scrollback, input line and the tick state machine.

mod engine;
mod input_editor;
mod line_store;

pub use engine::{ConsoleEngine, ConsoleState};
pub use input_editor::{BACKSPACE, InputEditor};
pub use line_store::LineStore;

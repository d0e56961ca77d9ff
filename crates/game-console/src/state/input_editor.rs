//! Pending input line editing.

/// Control character that deletes the last pending character.
pub const BACKSPACE: char = '\u{8}';

/// The line the user is typing.
///
/// Characters always accumulate, whatever the console state is. Only the
/// commit is gated: [`InputEditor::request_commit`] raises a flag that the
/// engine consumes on its next tick.
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    text: String,
    commit_requested: bool,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_char(&mut self, c: char) {
        self.text.push(c);
    }

    pub fn append_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Remove the last character. No-op on an empty line.
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Apply a control command. Only backspace has an effect.
    ///
    /// Returns `false` if the command was ignored.
    pub fn apply_command(&mut self, command: char) -> bool {
        match command {
            BACKSPACE => {
                self.backspace();
                true
            }
            _ => false,
        }
    }

    /// Mark the line for commit on the next tick (Enter).
    pub fn request_commit(&mut self) {
        self.commit_requested = true;
    }

    pub fn commit_requested(&self) -> bool {
        self.commit_requested
    }

    /// Drop a commit request without touching the text.
    pub(crate) fn cancel_commit(&mut self) {
        self.commit_requested = false;
    }

    /// Take the pending text and reset the editor for the next line.
    pub(crate) fn take_committed(&mut self) -> String {
        self.commit_requested = false;
        std::mem::take(&mut self.text)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_backspace() {
        let mut editor = InputEditor::new();
        editor.append_text("Hell");
        editor.append_char('o');
        assert_eq!(editor.text(), "Hello");

        editor.backspace();
        assert_eq!(editor.text(), "Hell");
    }

    #[test]
    fn test_backspace_on_empty_line() {
        let mut editor = InputEditor::new();
        editor.backspace();
        assert!(editor.is_empty());

        assert!(editor.apply_command(BACKSPACE));
        assert!(editor.is_empty());
    }

    #[test]
    fn test_backspace_removes_whole_char() {
        let mut editor = InputEditor::new();
        editor.append_text("grüß");
        editor.backspace();
        assert_eq!(editor.text(), "grü");
    }

    #[test]
    fn test_other_commands_ignored() {
        let mut editor = InputEditor::new();
        editor.append_text("abc");

        assert!(!editor.apply_command('\u{1b}'));
        assert!(!editor.apply_command('\t'));
        assert_eq!(editor.text(), "abc");
    }

    #[test]
    fn test_take_committed_resets() {
        let mut editor = InputEditor::new();
        editor.append_text("hi");
        editor.request_commit();
        assert!(editor.commit_requested());

        assert_eq!(editor.take_committed(), "hi");
        assert!(editor.is_empty());
        assert!(!editor.commit_requested());
    }
}

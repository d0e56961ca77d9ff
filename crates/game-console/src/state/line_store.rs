//! Bounded scrollback of output lines.

use crate::model::{OutputCategory, OutputLine};

/// Ordered scrollback, oldest line first.
///
/// Appends are unbounded; the capacity is enforced once per tick by
/// [`LineStore::trim_to_capacity`], which drops the oldest lines as one batch.
#[derive(Debug, Clone, Default)]
pub struct LineStore {
    lines: Vec<OutputLine>,
}

impl LineStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new line at the tail. Empty text is fine.
    pub fn append(&mut self, text: impl Into<String>, category: OutputCategory) {
        self.lines.push(OutputLine::new(text, category));
    }

    /// Concatenate onto the tail line if it has the same category, otherwise
    /// start a new line.
    ///
    /// Returns `true` if the text was merged into the existing tail.
    pub fn append_or_merge(&mut self, text: &str, category: OutputCategory) -> bool {
        match self.lines.last_mut() {
            Some(tail) if tail.category() == category => {
                tail.push_str(text);
                true
            }
            _ => {
                self.append(text, category);
                false
            }
        }
    }

    /// Evict the oldest `len - capacity` lines, keeping the rest in order.
    ///
    /// Returns the number of evicted lines.
    pub fn trim_to_capacity(&mut self, capacity: usize) -> usize {
        let excess = self.lines.len().saturating_sub(capacity);
        if excess > 0 {
            self.lines.drain(..excess);
        }
        excess
    }

    pub fn lines(&self) -> &[OutputLine] {
        &self.lines
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(store: &LineStore) -> Vec<&str> {
        store.lines().iter().map(|l| l.text()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut store = LineStore::new();
        store.append("a", OutputCategory::Info);
        store.append("", OutputCategory::Error);
        store.append("c", OutputCategory::UserInput);

        assert_eq!(texts(&store), vec!["a", "", "c"]);
        assert_eq!(store.lines()[1].category(), OutputCategory::Error);
    }

    #[test]
    fn test_merge_same_category() {
        let mut store = LineStore::new();
        assert!(!store.append_or_merge("a", OutputCategory::Info));
        assert!(store.append_or_merge("b", OutputCategory::Info));

        assert_eq!(store.len(), 1);
        assert_eq!(store.last(), Some(&OutputLine::new("ab", OutputCategory::Info)));
    }

    #[test]
    fn test_merge_category_change_starts_new_line() {
        let mut store = LineStore::new();
        store.append_or_merge("a", OutputCategory::Info);
        store.append_or_merge("b", OutputCategory::Error);

        assert_eq!(texts(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_trim_keeps_most_recent_in_order() {
        let mut store = LineStore::new();
        for text in ["a", "b", "c", "d"] {
            store.append(text, OutputCategory::Info);
        }

        assert_eq!(store.trim_to_capacity(3), 1);
        assert_eq!(texts(&store), vec!["b", "c", "d"]);

        store.append_or_merge("!", OutputCategory::Info);
        assert_eq!(texts(&store), vec!["b", "c", "d!"]);
    }

    #[test]
    fn test_trim_to_zero_empties_store() {
        let mut store = LineStore::new();
        store.append("a", OutputCategory::Info);
        store.append("b", OutputCategory::Info);

        assert_eq!(store.trim_to_capacity(0), 2);
        assert!(store.is_empty());
        assert_eq!(store.trim_to_capacity(0), 0);
    }

    #[test]
    fn test_trim_under_capacity_is_noop() {
        let mut store = LineStore::new();
        store.append("a", OutputCategory::Info);

        assert_eq!(store.trim_to_capacity(10), 0);
        assert_eq!(texts(&store), vec!["a"]);
    }

    #[test]
    fn test_capacity_invariant_over_many_appends() {
        let mut store = LineStore::new();
        for capacity in 0..5 {
            for i in 0..12usize {
                store.append(i.to_string(), OutputCategory::Info);
                store.trim_to_capacity(capacity);
                assert!(store.len() <= capacity);

                let expected: Vec<String> = (0..=i)
                    .skip((i + 1).saturating_sub(capacity))
                    .map(|n| n.to_string())
                    .collect();
                let actual: Vec<String> = texts(&store).iter().map(|s| s.to_string()).collect();
                assert_eq!(actual, expected);
            }
            store.clear();
        }
    }
}

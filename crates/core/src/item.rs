//! Todo item - a single task record with a completion flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker rendered for a completed todo.
const DONE_MARKER: char = 'X';
/// Marker rendered for a pending todo.
const UNDONE_MARKER: char = ' ';

/// A single task record.
///
/// Equality is structural: two todos are equal iff title, description,
/// and done flag all match, regardless of how they were constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Task title
    title: String,
    /// Free-form description, empty by default
    description: String,
    /// Completion flag
    done: bool,
}

impl Todo {
    /// Create a todo with an empty description. Any title string is
    /// accepted, including the empty string.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            done: false,
        }
    }

    /// Create a todo with a description.
    pub fn with_description(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            done: false,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    /// Mark the todo completed. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the todo not completed. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Current completion state.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { DONE_MARKER } else { UNDONE_MARKER };
        write!(f, "[{}] {}", marker, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let todo = Todo::new("Buy milk");

        assert_eq!(todo.title(), "Buy milk");
        assert_eq!(todo.description(), "");
        assert!(!todo.is_done());
    }

    #[test]
    fn test_structural_equality() {
        let mut a = Todo::with_description("Buy milk", "2% only");
        let b = Todo::with_description("Buy milk", "2% only");

        assert_eq!(a, b);

        a.mark_done();
        assert_ne!(a, b);

        a.mark_undone();
        assert_eq!(a, b);
    }

    #[test]
    fn test_equality_ignores_construction_order() {
        let a = Todo::with_description("Buy milk", "");
        let b = Todo::new("Buy milk");

        assert_eq!(a, b);
    }

    #[test]
    fn test_mark_done_idempotent() {
        let mut todo = Todo::new("Clean room");

        todo.mark_done();
        assert!(todo.is_done());

        todo.mark_done();
        assert!(todo.is_done());
    }

    #[test]
    fn test_display_markers() {
        let mut todo = Todo::new("Go to gym");

        assert_eq!(todo.to_string(), "[ ] Go to gym");

        todo.mark_done();
        assert_eq!(todo.to_string(), "[X] Go to gym");
    }

    #[test]
    fn test_title_accessor_mutation() {
        let mut todo = Todo::new("Buy milk");
        todo.set_title("Buy oat milk");
        todo.set_description("from the corner shop");

        assert_eq!(todo.title(), "Buy oat milk");
        assert_eq!(todo.description(), "from the corner shop");
    }

    #[test]
    fn test_serialize_shape() {
        let todo = Todo::new("Buy milk");
        let json = serde_json::to_string(&todo).unwrap();

        assert_eq!(
            json,
            r#"{"title":"Buy milk","description":"","done":false}"#
        );
    }
}

//! Todo list - ordered, owning collection of todos.
//!
//! Responsibilities:
//! - Preserve insertion order of owned todos
//! - Provide the `each`/`each_mut` traversal primitive
//! - Derive filtering, search, and bulk mutation from that primitive

use crate::item::Todo;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// An ordered, owning collection of [`Todo`] items.
///
/// The list title is fixed at construction. Items are appended at the end
/// and keep their insertion order across removals. Value-equal todos may
/// coexist; no deduplication is performed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoList {
    /// List title, fixed at construction
    title: String,
    /// Owned todos in insertion order
    todos: Vec<Todo>,
}

impl TodoList {
    /// Create an empty list with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            todos: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Append a todo at the end. Returns the list for chaining.
    pub fn add(&mut self, todo: Todo) -> &mut Self {
        debug!("added todo: {}", todo.title());
        self.todos.push(todo);
        self
    }

    /// Number of todos in the list.
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// First todo, or `None` when the list is empty.
    pub fn first(&self) -> Option<&Todo> {
        self.todos.first()
    }

    /// Last todo, or `None` when the list is empty.
    pub fn last(&self) -> Option<&Todo> {
        self.todos.last()
    }

    /// The todo at `idx`, or `IndexOutOfRange` when `idx >= size()`.
    pub fn item_at(&self, idx: usize) -> Result<&Todo, TodoListError> {
        self.todos.get(idx).ok_or(TodoListError::IndexOutOfRange {
            index: idx,
            len: self.todos.len(),
        })
    }

    fn item_at_mut(&mut self, idx: usize) -> Result<&mut Todo, TodoListError> {
        let len = self.todos.len();
        self.todos
            .get_mut(idx)
            .ok_or(TodoListError::IndexOutOfRange { index: idx, len })
    }

    /// Mark the todo at `idx` done, propagating `IndexOutOfRange`.
    pub fn mark_done_at(&mut self, idx: usize) -> Result<(), TodoListError> {
        self.item_at_mut(idx)?.mark_done();
        Ok(())
    }

    /// Mark the todo at `idx` not done, propagating `IndexOutOfRange`.
    pub fn mark_undone_at(&mut self, idx: usize) -> Result<(), TodoListError> {
        self.item_at_mut(idx)?.mark_undone();
        Ok(())
    }

    /// Mark every todo done. No-op on an empty list.
    pub fn mark_all_done(&mut self) {
        self.each_mut(|todo| todo.mark_done());
    }

    /// Mark every todo not done. No-op on an empty list.
    pub fn mark_all_undone(&mut self) {
        self.each_mut(|todo| todo.mark_undone());
    }

    /// True iff every todo is done. Vacuously true for an empty list.
    pub fn is_all_done(&self) -> bool {
        self.todos.iter().all(Todo::is_done)
    }

    /// Remove and return the todo at `idx`, shifting later todos left.
    ///
    /// Unlike [`remove_first`](Self::remove_first) and
    /// [`remove_last`](Self::remove_last), an out-of-range index is an
    /// error rather than `None`.
    pub fn remove_at(&mut self, idx: usize) -> Result<Todo, TodoListError> {
        if idx >= self.todos.len() {
            return Err(TodoListError::IndexOutOfRange {
                index: idx,
                len: self.todos.len(),
            });
        }
        let todo = self.todos.remove(idx);
        debug!("removed todo at {}: {}", idx, todo.title());
        Ok(todo)
    }

    /// Remove and return the first todo, or `None` when empty.
    pub fn remove_first(&mut self) -> Option<Todo> {
        if self.todos.is_empty() {
            None
        } else {
            Some(self.todos.remove(0))
        }
    }

    /// Remove and return the last todo, or `None` when empty.
    pub fn remove_last(&mut self) -> Option<Todo> {
        self.todos.pop()
    }

    /// Visit every todo in insertion order.
    ///
    /// This is the traversal primitive the query operations below are
    /// built on. Returns the list for chaining.
    pub fn each<'a, F>(&'a self, mut visitor: F) -> &'a Self
    where
        F: FnMut(&'a Todo),
    {
        for todo in &self.todos {
            visitor(todo);
        }
        self
    }

    /// Visit every todo in insertion order with mutable access.
    ///
    /// Mutating counterpart of [`each`](Self::each); drives the bulk
    /// mark operations. Returns the list for chaining.
    pub fn each_mut<F>(&mut self, mut visitor: F) -> &mut Self
    where
        F: FnMut(&mut Todo),
    {
        for todo in &mut self.todos {
            visitor(todo);
        }
        self
    }

    /// New list with the same title holding clones of the todos the
    /// predicate accepts, in original order. The receiver is unchanged.
    pub fn select<P>(&self, mut predicate: P) -> TodoList
    where
        P: FnMut(&Todo) -> bool,
    {
        let mut result = TodoList::new(&self.title);
        self.each(|todo| {
            if predicate(todo) {
                result.add(todo.clone());
            }
        });
        result
    }

    /// First todo whose title equals `title`, or `None` when no match.
    pub fn find_by_title(&self, title: &str) -> Option<&Todo> {
        let mut found = None;
        self.each(|todo| {
            if found.is_none() && todo.title() == title {
                found = Some(todo);
            }
        });
        found
    }

    /// Mark the first todo whose title equals `title` done. Returns
    /// whether a match was found; no-op when none matches.
    pub fn mark_done_by_title(&mut self, title: &str) -> bool {
        let mut marked = false;
        self.each_mut(|todo| {
            if !marked && todo.title() == title {
                todo.mark_done();
                marked = true;
            }
        });
        if marked {
            debug!("marked done by title: {}", title);
        }
        marked
    }

    /// All completed todos, as a new list.
    pub fn all_done(&self) -> TodoList {
        self.select(|todo| todo.is_done())
    }

    /// All pending todos, as a new list.
    pub fn all_not_done(&self) -> TodoList {
        self.select(|todo| !todo.is_done())
    }

    pub fn as_slice(&self) -> &[Todo] {
        &self.todos
    }

    pub fn to_vec(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.todos.iter()
    }
}

impl fmt::Display for TodoList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---- {} ----", self.title)?;
        for todo in &self.todos {
            writeln!(f, "{todo}")?;
        }
        Ok(())
    }
}

impl Extend<Todo> for TodoList {
    fn extend<I: IntoIterator<Item = Todo>>(&mut self, iter: I) {
        self.todos.extend(iter);
    }
}

impl IntoIterator for TodoList {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoList {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.todos.iter()
    }
}

/// Todo list errors
#[derive(Debug, thiserror::Error)]
pub enum TodoListError {
    #[error("index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

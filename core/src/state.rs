//! In-memory list and edit-mode state.
//!
//! # Design
//! `TodoState` only changes through the methods below, which are called
//! after the server has confirmed a mutation. The edit slot is a single
//! enum so the target id and its scratch text are always set and cleared
//! together.

use crate::types::{Todo, TodoId};

/// Whether a row is being edited, and with what in-progress text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing { id: TodoId, text: String },
}

/// Derived counts shown under the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn total_label(&self) -> String {
        format!("Total: {}", self.total)
    }

    pub fn completed_label(&self) -> String {
        format!("Completed: {}", self.completed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoState {
    todos: Vec<Todo>,
    edit: EditMode,
}

impl TodoState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_todos(todos: Vec<Todo>) -> Self {
        Self {
            todos,
            edit: EditMode::Viewing,
        }
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn edit_mode(&self) -> &EditMode {
        &self.edit
    }

    pub fn editing_id(&self) -> Option<TodoId> {
        match &self.edit {
            EditMode::Editing { id, .. } => Some(*id),
            EditMode::Viewing => None,
        }
    }

    pub fn editing_text(&self) -> Option<&str> {
        match &self.edit {
            EditMode::Editing { text, .. } => Some(text),
            EditMode::Viewing => None,
        }
    }

    pub fn find(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Replace the whole list with a fresh server listing.
    pub fn replace_all(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
    }

    pub fn push(&mut self, todo: Todo) {
        self.todos.push(todo);
    }

    /// Swap the first item with a matching id for `todo`. Returns false when
    /// nothing matched, which happens when a reply arrives for an item that
    /// is no longer listed.
    pub fn replace(&mut self, todo: Todo) -> bool {
        match self.todos.iter_mut().find(|t| t.id == todo.id) {
            Some(slot) => {
                *slot = todo;
                true
            }
            None => false,
        }
    }

    /// Drop every item with `id`, keeping the rest in order.
    pub fn remove(&mut self, id: TodoId) -> usize {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        before - self.todos.len()
    }

    /// Start editing `id`. Any edit already in progress is discarded.
    pub fn begin_edit(&mut self, id: TodoId, current_text: &str) {
        self.edit = EditMode::Editing {
            id,
            text: current_text.to_string(),
        };
    }

    /// Update the scratch text. Ignored while viewing.
    pub fn set_edit_text(&mut self, new_text: &str) {
        if let EditMode::Editing { text, .. } = &mut self.edit {
            *text = new_text.to_string();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = EditMode::Viewing;
    }

    pub fn stats(&self) -> Stats {
        Stats {
            total: self.todos.len(),
            completed: self.todos.iter().filter(|t| t.completed).count(),
        }
    }
}

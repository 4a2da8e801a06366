//! Pure projection of `TodoState` into list markup and readouts.
//!
//! # Design
//! `render` reads nothing but its argument, so it can be tested without a
//! live document. Markup carries no inline handlers: every row has a
//! `data-id` and every control a `data-action`, and the same information
//! is exposed as structured `RowView`s for hosts that bind handlers
//! directly.

use crate::state::{EditMode, Stats, TodoState};
use crate::types::TodoId;

pub const EMPTY_STATE_HTML: &str = r#"<div class="empty-state">No todos yet. Add one above!</div>"#;

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    Display {
        id: TodoId,
        text: String,
        completed: bool,
    },
    Editing {
        id: TodoId,
        draft: String,
    },
}

impl RowView {
    pub fn id(&self) -> TodoId {
        match self {
            RowView::Display { id, .. } | RowView::Editing { id, .. } => *id,
        }
    }
}

/// Everything a host needs to refresh the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<RowView>,
    pub list_html: String,
    pub stats: Stats,
}

impl View {
    pub fn total_label(&self) -> String {
        self.stats.total_label()
    }

    pub fn completed_label(&self) -> String {
        self.stats.completed_label()
    }
}

pub fn render(state: &TodoState) -> View {
    let editing = match state.edit_mode() {
        EditMode::Editing { id, text } => Some((*id, text.as_str())),
        EditMode::Viewing => None,
    };

    let rows: Vec<RowView> = state
        .todos()
        .iter()
        .map(|todo| match editing {
            Some((id, draft)) if id == todo.id => RowView::Editing {
                id,
                draft: draft.to_string(),
            },
            _ => RowView::Display {
                id: todo.id,
                text: todo.text.clone(),
                completed: todo.completed,
            },
        })
        .collect();

    let list_html = if rows.is_empty() {
        EMPTY_STATE_HTML.to_string()
    } else {
        rows.iter().map(row_html).collect::<Vec<_>>().join("\n")
    };

    View {
        rows,
        list_html,
        stats: state.stats(),
    }
}

fn row_html(row: &RowView) -> String {
    match row {
        RowView::Editing { id, draft } => format!(
            concat!(
                r#"<div class="todo-item editing" data-id="{id}">"#,
                r#"<input type="text" class="todo-edit-input" data-action="edit-text" value="{draft}" autofocus />"#,
                r#"<button class="save-btn" data-action="save">Save</button>"#,
                r#"<button class="cancel-btn" data-action="cancel">Cancel</button>"#,
                "</div>"
            ),
            id = id,
            draft = escape_html(draft),
        ),
        RowView::Display {
            id,
            text,
            completed,
        } => format!(
            concat!(
                r#"<div class="{class}" data-id="{id}">"#,
                r#"<input type="checkbox" class="todo-checkbox" data-action="toggle"{checked} />"#,
                r#"<span class="todo-text">{text}</span>"#,
                r#"<button class="edit-btn" data-action="edit">Edit</button>"#,
                r#"<button class="delete-btn" data-action="delete">Delete</button>"#,
                "</div>"
            ),
            class = if *completed { "todo-item completed" } else { "todo-item" },
            id = id,
            checked = if *completed { " checked" } else { "" },
            text = escape_html(text),
        ),
    }
}

/// Escape `text` for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

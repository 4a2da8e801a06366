//! Terminal implementation of the core `Surface`.

use std::io::Write;
use std::path::PathBuf;

use todo_core::{Notice, RowView, Surface, TodoId, View};
use tracing::warn;

pub struct TerminalSurface<W> {
    out: W,
    html_path: Option<PathBuf>,
    rows: Vec<RowView>,
    /// Contents of the new-todo field.
    pub input: String,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, html_path: Option<PathBuf>) -> Self {
        Self {
            out,
            html_path,
            rows: Vec::new(),
            input: String::new(),
        }
    }

    /// Id of the row shown at 1-based position `n`.
    pub fn row_id(&self, n: usize) -> Option<TodoId> {
        n.checked_sub(1)
            .and_then(|i| self.rows.get(i))
            .map(RowView::id)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn present(&mut self, view: &View) {
        self.rows = view.rows.clone();
        if let Err(error) = self.out.write_all(format_view(view).as_bytes()) {
            warn!(%error, "failed to print view");
        }
        if let Some(path) = &self.html_path {
            if let Err(error) = std::fs::write(path, &view.list_html) {
                warn!(%error, path = %path.display(), "failed to write markup");
            }
        }
    }

    fn notify(&mut self, notice: Notice) {
        eprintln!("! {notice}");
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}

pub fn format_view(view: &View) -> String {
    let mut out = String::new();
    if view.rows.is_empty() {
        out.push_str("  No todos yet. Add one above!\n");
    }
    for (i, row) in view.rows.iter().enumerate() {
        let line = match row {
            RowView::Display {
                text, completed, ..
            } => {
                let mark = if *completed { "x" } else { " " };
                format!("{:>3}. [{mark}] {}\n", i + 1, printable(text))
            }
            RowView::Editing { draft, .. } => {
                format!("{:>3}. [~] {}_  (save / cancel)\n", i + 1, printable(draft))
            }
        };
        out.push_str(&line);
    }
    out.push_str(&format!("{}  {}\n", view.total_label(), view.completed_label()));
    out
}

/// Spell out control characters so stored text stays on its own row and
/// cannot drive the terminal.
fn printable(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_debug());
        } else {
            out.push(c);
        }
    }
    out
}

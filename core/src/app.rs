//! The controller that ties state, requests and rendering together.
//!
//! # Design
//! `TodoApp` owns the only `TodoState`. Each user operation validates its
//! input, builds a request with `TodoClient`, hands it to the host's
//! `Transport`, and applies the parsed reply. State changes only after a
//! successful reply, and every change is followed by a render pushed to the
//! host's `Surface`. Failures are reported once through `Surface::notify`
//! and also returned so callers can branch on them.
//!
//! Nothing here sequences overlapping requests: a host that interleaves
//! operations gets last-reply-wins behaviour.

use tracing::{debug, warn};

use crate::client::TodoClient;
use crate::error::{ApiError, Notice};
use crate::http::{HttpRequest, HttpResponse};
use crate::render::{render, View};
use crate::state::TodoState;
use crate::types::{CreateTodo, TodoId, UpdateTodo};

/// Executes one HTTP round-trip on behalf of the controller.
///
/// A non-2xx reply is still `Ok`; status interpretation belongs to the
/// client. `Err` means no response was obtained at all.
pub trait Transport {
    fn execute(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// The visible side of the application, implemented by the host UI.
pub trait Surface {
    /// Replace the list container and the readouts.
    fn present(&mut self, view: &View);

    /// Show a blocking notification.
    fn notify(&mut self, notice: Notice);

    /// Empty the new-todo input field.
    fn clear_input(&mut self);
}

pub struct TodoApp<T, S> {
    client: TodoClient,
    state: TodoState,
    transport: T,
    surface: S,
}

impl<T: Transport, S: Surface> TodoApp<T, S> {
    pub fn new(client: TodoClient, transport: T, surface: S) -> Self {
        Self {
            client,
            state: TodoState::new(),
            transport,
            surface,
        }
    }

    pub fn state(&self) -> &TodoState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the full list and replace local state with it.
    pub fn load_all(&mut self) -> Result<(), Notice> {
        let request = self.client.build_list_todos();
        let todos = self
            .round_trip(request)
            .and_then(|resp| self.client.parse_list_todos(resp))
            .map_err(|e| self.fail("error fetching todos", e, Notice::LoadFailed))?;
        self.state.replace_all(todos);
        self.render();
        Ok(())
    }

    pub fn add(&mut self, raw_text: &str) -> Result<(), Notice> {
        let text = raw_text.trim();
        if text.is_empty() {
            return Err(self.reject(Notice::EnterTodo));
        }
        let input = CreateTodo {
            text: text.to_string(),
        };
        let todo = self
            .client
            .build_create_todo(&input)
            .and_then(|req| self.round_trip(req))
            .and_then(|resp| self.client.parse_create_todo(resp))
            .map_err(|e| self.fail("error adding todo", e, Notice::AddFailed))?;
        self.state.push(todo);
        self.surface.clear_input();
        self.render();
        Ok(())
    }

    pub fn toggle(&mut self, id: TodoId) -> Result<(), Notice> {
        let request = self.client.build_toggle_todo(id);
        let todo = self
            .round_trip(request)
            .and_then(|resp| self.client.parse_toggle_todo(resp))
            .map_err(|e| self.fail("error toggling todo", e, Notice::UpdateFailed))?;
        if self.state.replace(todo) {
            self.render();
        } else {
            debug!(%id, "toggled todo is no longer listed");
        }
        Ok(())
    }

    pub fn remove(&mut self, id: TodoId) -> Result<(), Notice> {
        let request = self.client.build_delete_todo(id);
        self.round_trip(request)
            .and_then(|resp| self.client.parse_delete_todo(resp))
            .map_err(|e| self.fail("error deleting todo", e, Notice::DeleteFailed))?;
        self.state.remove(id);
        self.render();
        Ok(())
    }

    pub fn begin_edit(&mut self, id: TodoId, current_text: &str) {
        self.state.begin_edit(id, current_text);
        self.render();
    }

    /// Record what the user has typed into the edit field so far.
    pub fn set_edit_text(&mut self, text: &str) {
        self.state.set_edit_text(text);
    }

    pub fn cancel_edit(&mut self) {
        self.state.cancel_edit();
        self.render();
    }

    /// Commit the scratch text for `id`. Edit mode survives any failure so
    /// the typed text is not lost.
    pub fn save_edit(&mut self, id: TodoId) -> Result<(), Notice> {
        let text = self.state.editing_text().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(self.reject(Notice::EmptyText));
        }
        let input = UpdateTodo { text };
        let todo = self
            .client
            .build_update_todo(id, &input)
            .and_then(|req| self.round_trip(req))
            .and_then(|resp| self.client.parse_update_todo(resp))
            .map_err(|e| self.fail("error updating todo", e, Notice::UpdateFailed))?;
        self.state.replace(todo);
        self.state.cancel_edit();
        self.render();
        Ok(())
    }

    /// Push a fresh projection of the current state to the surface.
    pub fn render(&mut self) {
        let view = render(&self.state);
        self.surface.present(&view);
    }

    fn round_trip(&mut self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        debug!(method = %request.method, path = %request.path, "sending request");
        self.transport.execute(request)
    }

    fn reject(&mut self, notice: Notice) -> Notice {
        debug!(%notice, "rejected input");
        self.surface.notify(notice);
        notice
    }

    fn fail(&mut self, context: &str, error: ApiError, notice: Notice) -> Notice {
        warn!(%error, "{context}");
        self.surface.notify(notice);
        notice
    }
}

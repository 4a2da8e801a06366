//! Client core for the todo list.
//!
//! # Overview
//! Holds the in-memory list and edit state, builds and parses the REST
//! calls that change it, and projects it into list markup plus readouts.
//! The host supplies the I/O: a `Transport` that executes requests and a
//! `Surface` that shows views and notifications.
//!
//! # Design
//! - `TodoClient` is stateless: `build_*` produces a request, `parse_*`
//!   consumes a response, so the I/O boundary is explicit.
//! - `TodoState` changes only after the server confirms a mutation.
//! - `render` is a pure function of `TodoState`.
//! - `TodoApp` owns the state and drives the three together.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod render;
pub mod state;
pub mod types;

pub use app::{Surface, TodoApp, Transport};
pub use client::TodoClient;
pub use config::ClientConfig;
pub use error::{ApiError, Notice};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::{escape_html, render, RowView, View};
pub use state::{EditMode, Stats, TodoState};
pub use types::{CreateTodo, Todo, TodoId, UpdateTodo};

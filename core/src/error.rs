//! Error types for the todo client.
//!
//! # Design
//! `ApiError` describes why a single request failed and is logged, never
//! shown to the user. `Notice` is the user-facing side: every failure,
//! local validation or remote, collapses into one fixed message per
//! operation.

use thiserror::Error;

/// Errors produced while executing or interpreting a request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The request never produced a response.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// A blocking notification shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Notice {
    #[error("Please enter a todo")]
    EnterTodo,

    #[error("Todo text cannot be empty")]
    EmptyText,

    #[error("Failed to load todos")]
    LoadFailed,

    #[error("Failed to add todo")]
    AddFailed,

    /// Shared by toggle and text edits.
    #[error("Failed to update todo")]
    UpdateFailed,

    #[error("Failed to delete todo")]
    DeleteFailed,
}

//! Where the todo API lives.

/// Path of the todo collection relative to the base URL.
pub const DEFAULT_API_PATH: &str = "/api/todos";

/// Location of the todo API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, e.g. `http://127.0.0.1:3000`. May be empty for
    /// hosts that resolve relative paths themselves.
    pub base_url: String,
    /// Collection path, e.g. `/api/todos`.
    pub api_path: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self::with_api_path(base_url, DEFAULT_API_PATH)
    }

    pub fn with_api_path(base_url: &str, api_path: &str) -> Self {
        let api_path = api_path.trim_end_matches('/');
        let api_path = if api_path.starts_with('/') || api_path.is_empty() {
            api_path.to_string()
        } else {
            format!("/{api_path}")
        };
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_path,
        }
    }

    /// Full URL of the todo collection.
    pub fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, self.api_path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("")
    }
}

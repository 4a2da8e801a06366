use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

#[derive(Deserialize)]
pub struct TextBody {
    pub text: String,
}

/// Ids are handed out sequentially, so key order is insertion order.
#[derive(Debug)]
pub struct Store {
    next_id: u64,
    todos: BTreeMap<u64, Todo>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            todos: BTreeMap::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route(
            "/api/todos/{id}",
            get(get_todo)
                .put(toggle_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Todo not found" })))
}

fn required_text(input: TextBody) -> ApiResult<String> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Text is required" })),
        ));
    }
    Ok(text.to_string())
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    let store = db.read().await;
    Json(store.todos.values().cloned().collect())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TextBody>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let text = required_text(input)?;
    let mut store = db.write().await;
    let todo = Todo {
        id: store.next_id,
        text,
        completed: false,
    };
    store.next_id += 1;
    store.todos.insert(todo.id, todo.clone());
    debug!(id = todo.id, "created todo");
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Todo>> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or_else(not_found)
}

async fn toggle_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Todo>> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or_else(not_found)?;
    todo.completed = !todo.completed;
    debug!(id, completed = todo.completed, "toggled todo");
    Ok(Json(todo.clone()))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<TextBody>,
) -> ApiResult<Json<Todo>> {
    let text = required_text(input)?;
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or_else(not_found)?;
    todo.text = text;
    debug!(id, "updated todo text");
    Ok(Json(todo.clone()))
}

async fn delete_todo(State(db): State<Db>, Path(id): Path<u64>) -> ApiResult<Json<Value>> {
    let mut store = db.write().await;
    store.todos.remove(&id).ok_or_else(not_found)?;
    debug!(id, "deleted todo");
    Ok(Json(json!({ "message": "Todo deleted successfully" })))
}

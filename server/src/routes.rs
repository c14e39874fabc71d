use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::Result,
    model::{CreateTodo, Todo, TodoParams, UpdateTodo},
    store::TodoStore,
};

/// Routes relative to the API prefix.
pub fn todo_routes(store: TodoStore) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route(
            "/todos/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(update_todo)
                .delete(delete_todo),
        )
        .with_state(store)
}

async fn list_todos(State(store): State<TodoStore>) -> Json<Vec<Todo>> {
    Json(store.list().await)
}

async fn create_todo(
    State(store): State<TodoStore>,
    payload: std::result::Result<Json<TodoParams<CreateTodo>>, JsonRejection>,
) -> Result<(StatusCode, Json<Todo>)> {
    let Json(params) = payload?;
    let todo = store.create(params.todo).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn get_todo(State(store): State<TodoStore>, Path(id): Path<i64>) -> Result<Json<Todo>> {
    Ok(Json(store.get(id).await?))
}

async fn update_todo(
    State(store): State<TodoStore>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<TodoParams<UpdateTodo>>, JsonRejection>,
) -> Result<Json<Todo>> {
    // A missing id is reported before a malformed body.
    store.get(id).await?;
    let Json(params) = payload?;
    Ok(Json(store.update(id, params.todo).await?))
}

async fn delete_todo(State(store): State<TodoStore>, Path(id): Path<i64>) -> Result<StatusCode> {
    store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

//! REST surface: thin handlers mapping HTTP verbs onto the service.

use axum::extract::{OriginalUri, Path, State};
use axum::http::StatusCode;
use axum::middleware;
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use shared::{Task, TaskPayload};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::service::TaskService;

pub fn router(service: TaskService) -> Router {
    Router::new()
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/:id",
            get(get_task).put(update_task).delete(delete_task),
        )
        .layer(CorsLayer::permissive())
        .layer(middleware::from_fn(crate::error::catch_unclassified))
        .with_state(service)
}

async fn list_tasks(
    State(service): State<TaskService>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<Task>>, ApiError> {
    let tasks = service
        .list()
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;
    Ok(Json(tasks))
}

async fn create_task(
    State(service): State<TaskService>,
    OriginalUri(uri): OriginalUri,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let task = service
        .create(payload)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;
    Ok((StatusCode::CREATED, Json(task)))
}

async fn get_task(
    State(service): State<TaskService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    let task = service
        .get(id)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;
    Ok(Json(task))
}

async fn update_task(
    State(service): State<TaskService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Result<Json<Task>, ApiError> {
    let task = service
        .update(id, payload)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;
    Ok(Json(task))
}

async fn delete_task(
    State(service): State<TaskService>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service
        .delete(id)
        .await
        .map_err(|err| ApiError::new(err, uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

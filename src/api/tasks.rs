//! Task endpoints under `/task`.

use super::models::{CreateTaskPayload, TaskPayload};
use super::server::AppState;
use crate::error::{TaskError, TaskResult};
use crate::types::TaskId;
use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    routing::{delete, get, patch, post, put},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/task", get(get_all_tasks))
        .route("/task/active", get(get_active_tasks))
        .route("/task/completed", get(get_completed_tasks))
        .route("/task/new", post(create_task))
        .route("/task/{id}", get(get_task_by_id))
        .route("/task/update/{id}", put(update_task))
        .route("/task/update/{id}/completed", patch(mark_task_completed))
        .route("/task/update/{id}/active", patch(mark_task_active))
        .route("/task/delete/{id}", delete(delete_task))
}

/// An id that failed to parse is treated as absent.
fn optional_id(id: Result<Path<TaskId>, PathRejection>) -> Option<TaskId> {
    id.ok().map(|Path(id)| id)
}

fn required_id(id: Result<Path<TaskId>, PathRejection>) -> TaskResult<TaskId> {
    id.map(|Path(id)| id)
        .map_err(|rejection| TaskError::InvalidRequest(rejection.body_text()))
}

/// A missing JSON content type is 415; any other body rejection is 400.
fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> TaskResult<T> {
    body.map(|Json(payload)| payload)
        .map_err(|rejection| match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                TaskError::UnsupportedMediaType(rejection.body_text())
            }
            _ => TaskError::MalformedBody(rejection.body_text()),
        })
}

async fn get_all_tasks(State(state): State<AppState>) -> TaskResult<Json<Vec<TaskPayload>>> {
    let tasks = state.service.find_all()?;
    Ok(Json(state.mapper.to_payloads(tasks)))
}

async fn get_active_tasks(State(state): State<AppState>) -> TaskResult<Json<Vec<TaskPayload>>> {
    let tasks = state.service.find_all_active()?;
    Ok(Json(state.mapper.to_payloads(tasks)))
}

async fn get_completed_tasks(
    State(state): State<AppState>,
) -> TaskResult<Json<Vec<TaskPayload>>> {
    let tasks = state.service.find_all_completed()?;
    Ok(Json(state.mapper.to_payloads(tasks)))
}

async fn get_task_by_id(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<Json<TaskPayload>> {
    let task = state.service.find_by_id(required_id(id)?)?;
    Ok(Json(state.mapper.to_payload(task)))
}

async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskPayload>, JsonRejection>,
) -> TaskResult<(StatusCode, Json<TaskPayload>)> {
    let payload = json_body(body)?;
    payload.validate()?;

    let task = state.service.create(state.mapper.create_to_entity(payload))?;
    Ok((StatusCode::CREATED, Json(state.mapper.to_payload(task))))
}

async fn update_task(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
    body: Result<Json<TaskPayload>, JsonRejection>,
) -> TaskResult<Json<TaskPayload>> {
    let payload = json_body(body)?;
    payload.validate()?;

    let task = state
        .service
        .update(state.mapper.to_entity(payload), optional_id(id))?;
    Ok(Json(state.mapper.to_payload(task)))
}

async fn mark_task_completed(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<Json<TaskPayload>> {
    let task = state.service.mark_completed(optional_id(id))?;
    Ok(Json(state.mapper.to_payload(task)))
}

async fn mark_task_active(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<Json<TaskPayload>> {
    let task = state.service.mark_active(optional_id(id))?;
    Ok(Json(state.mapper.to_payload(task)))
}

async fn delete_task(
    State(state): State<AppState>,
    id: Result<Path<TaskId>, PathRejection>,
) -> TaskResult<StatusCode> {
    state.service.delete_by_id(required_id(id)?)?;
    Ok(StatusCode::OK)
}

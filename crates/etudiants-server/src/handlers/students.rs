//! Student handlers

use super::{ApiError, Operation};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use etudiants_types::{CreateStudentRequest, EtudiantError, Student, UpdateStudentRequest};
use serde::Serialize;
use serde_json::{Map, Value};

pub const WELCOME: &str = "Bienvenue dans l'app";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    message: String,
}

/// Only plain decimal digits name a student; anything else matches none
fn student_id(raw: &str, operation: Operation) -> Result<i64, ApiError> {
    let invalid = || ApiError::new(operation, EtudiantError::InvalidId(raw.to_string()));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<i64>().map_err(|_| invalid())
}

pub async fn home() -> &'static str {
    WELCOME
}

pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    Json(state.registry.list().await)
}

pub async fn get(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Student>, ApiError> {
    let id = student_id(&raw_id, Operation::Read)?;

    state
        .registry
        .get(id)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Operation::Read, e))
}

pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<(StatusCode, Json<Vec<Student>>), ApiError> {
    let Json(body) = payload.map_err(|r| ApiError::invalid_body(Operation::Add, r))?;
    let student = CreateStudentRequest::from(body)
        .validate()
        .map_err(|e| ApiError::new(Operation::Add, e))?;

    let students = state
        .registry
        .create(student)
        .await
        .map_err(|e| ApiError::new(Operation::Add, e))?;

    Ok((StatusCode::CREATED, Json(students)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let id = student_id(&raw_id, Operation::Update)?;
    let Json(body) = payload.map_err(|r| ApiError::invalid_body(Operation::Update, r))?;
    let changes = UpdateStudentRequest::from(body)
        .validate()
        .map_err(|e| ApiError::new(Operation::Update, e))?;

    state
        .registry
        .update(id, changes)
        .await
        .map(Json)
        .map_err(|e| ApiError::new(Operation::Update, e))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = student_id(&raw_id, Operation::Delete)?;

    let id = state
        .registry
        .delete(id)
        .await
        .map_err(|e| ApiError::new(Operation::Delete, e))?;

    Ok(Json(MessageResponse {
        message: format!("Étudiant avec id={} supprimé", id),
    }))
}

//! Health check

use super::{ApiError, Operation};
use crate::AppState;
use axum::{extract::State, Json};
use etudiants_types::EtudiantError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    students: i64,
}

pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let students = state.db.count().await.map_err(|e| {
        tracing::error!("Health check failed: {:#}", e);
        ApiError::new(Operation::Read, EtudiantError::Persistence(format!("{:#}", e)))
    })?;

    Ok(Json(HealthResponse {
        status: "ok",
        students,
    }))
}

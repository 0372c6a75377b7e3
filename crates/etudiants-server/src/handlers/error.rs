//! Mapping of service errors onto HTTP responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use etudiants_types::request::{MISSING_CREATE_FIELDS, MISSING_UPDATE_FIELDS};
use etudiants_types::{EtudiantError, FieldError, NOT_FOUND_MESSAGE};
use serde_json::json;

/// What the failing request was doing; picks the 500 message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Read,
    Add,
    Update,
    Delete,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::Read => "Erreur serveur lors de la lecture.",
            Operation::Add => "Erreur serveur lors de l'ajout.",
            Operation::Update => "Erreur serveur lors de la mise à jour.",
            Operation::Delete => "Erreur serveur lors de la suppression.",
        }
    }

    fn invalid_body_message(self) -> &'static str {
        match self {
            Operation::Update => MISSING_UPDATE_FIELDS,
            _ => MISSING_CREATE_FIELDS,
        }
    }
}

#[derive(Debug)]
pub struct ApiError {
    operation: Operation,
    error: EtudiantError,
}

impl ApiError {
    pub fn new(operation: Operation, error: EtudiantError) -> Self {
        Self { operation, error }
    }

    pub fn not_found(operation: Operation, id: i64) -> Self {
        Self::new(operation, EtudiantError::NotFound(id))
    }

    /// The body could not be read as a JSON object
    pub fn invalid_body(operation: Operation, rejection: JsonRejection) -> Self {
        let fields = vec![FieldError::new("body", rejection.body_text())];
        Self::new(
            operation,
            EtudiantError::validation(operation.invalid_body_message(), fields),
        )
    }

    pub fn status(&self) -> StatusCode {
        match self.error {
            EtudiantError::Validation { .. } => StatusCode::BAD_REQUEST,
            EtudiantError::NotFound(_) | EtudiantError::InvalidId(_) => StatusCode::NOT_FOUND,
            EtudiantError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self.error {
            EtudiantError::Validation { message, fields } if fields.is_empty() => {
                json!({ "message": message })
            }
            EtudiantError::Validation { message, fields } => {
                json!({ "message": message, "errors": fields })
            }
            EtudiantError::NotFound(_) | EtudiantError::InvalidId(_) => {
                json!({ "message": NOT_FOUND_MESSAGE })
            }
            EtudiantError::Persistence(detail) => json!({
                "message": self.operation.failure_message(),
                "detail": detail,
            }),
        };
        (status, Json(body)).into_response()
    }
}

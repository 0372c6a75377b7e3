//! Error types for the student service

use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EtudiantError>;

/// Body of every 404 answer
pub const NOT_FOUND_MESSAGE: &str = "Étudiant non trouvé";

#[derive(Error, Debug)]
pub enum EtudiantError {
    /// The request body is missing fields or carries values of the wrong type
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldError>,
    },

    #[error("Étudiant non trouvé: {0}")]
    NotFound(i64),

    /// A path id that is not an integer; no student can match it
    #[error("Identifiant invalide: {0}")]
    InvalidId(String),

    /// The store rejected a statement
    #[error("Database error: {0}")]
    Persistence(String),
}

impl EtudiantError {
    pub fn validation(message: impl Into<String>, fields: Vec<FieldError>) -> Self {
        EtudiantError::Validation {
            message: message.into(),
            fields,
        }
    }
}

/// One invalid field of a request body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    pub fn missing(field: &'static str) -> Self {
        Self::new(field, "champ requis")
    }
}

//! Etudiants Server
//!
//! CRUD over students stored in SQLite, with every row mirrored in memory
//! for reads.

pub mod config;
pub mod handlers;
pub mod services;
pub mod storage;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use handlers::students;
use services::StudentRegistry;
use storage::Database;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub registry: Arc<StudentRegistry>,
}

impl AppState {
    /// Open the store and load the mirror
    pub async fn open(database_path: &str) -> Result<Self> {
        let db = Arc::new(
            Database::new(database_path)
                .await
                .context("Failed to initialize database")?,
        );
        let registry = Arc::new(StudentRegistry::load(db.clone()).await?);

        Ok(Self { db, registry })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(students::home))
        .route("/health", get(handlers::health))
        .route("/etudiants", get(students::list))
        .route("/etudiants/:id", get(students::get))
        .route("/ajouter", post(students::create))
        .route("/etudiants/modifier/:id", put(students::update))
        .route("/etudiants/supprimer/:id", delete(students::delete))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

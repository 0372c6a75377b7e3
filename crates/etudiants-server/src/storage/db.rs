//! SQLite database layer (embedded, no external dependencies)
//!
//! Every statement borrows a pooled connection for its own duration only;
//! the connection goes back to the pool when the statement finishes or fails.

use anyhow::{Context, Result};
use etudiants_types::Student;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        if let Some(parent) = std::path::Path::new(database_path)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create database directory: {}", parent.display())
            })?;
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        let db = Self { pool };
        db.ensure_schema()
            .await
            .context("Failed to create the etudiants table")?;

        tracing::info!("Database initialization complete");
        Ok(db)
    }

    /// Create the table if it is not there yet
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS etudiants (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nom TEXT NOT NULL,
                age INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn load_all(&self) -> Result<Vec<Student>> {
        let rows: Vec<StudentRow> = sqlx::query_as(
            r#"
            SELECT id, nom, age FROM etudiants ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Returns the id assigned by the store
    pub async fn insert(&self, nom: &str, age: i64) -> Result<i64> {
        let result = sqlx::query(
            r#"
            INSERT INTO etudiants (nom, age) VALUES (?1, ?2)
            "#,
        )
        .bind(nom)
        .bind(age)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Does nothing when no row has this id
    pub async fn update(&self, id: i64, nom: &str, age: i64) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE etudiants SET nom = ?1, age = ?2 WHERE id = ?3
            "#,
        )
        .bind(nom)
        .bind(age)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Does nothing when no row has this id
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query(
            r#"
            DELETE FROM etudiants WHERE id = ?1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM etudiants")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Close the pool; later statements fail
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(sqlx::FromRow)]
struct StudentRow {
    id: i64,
    nom: String,
    age: i64,
}

impl From<StudentRow> for Student {
    fn from(r: StudentRow) -> Self {
        Student {
            id: r.id,
            nom: r.nom,
            age: r.age,
        }
    }
}

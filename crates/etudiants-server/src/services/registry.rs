//! Student registry: keeps the store and the mirror in step
//!
//! Mutations hold the mirror's write lock across their store statement, so a
//! reader never sees the mirror and the table disagree. A failed statement
//! leaves the mirror as it was.

use crate::storage::{Database, StudentMirror};
use anyhow::Context;
use etudiants_types::{EtudiantError, NewStudent, Result, Student, StudentChanges};
use std::sync::Arc;
use tracing::{debug, error, info};

pub struct StudentRegistry {
    db: Arc<Database>,
    mirror: StudentMirror,
}

impl StudentRegistry {
    /// Fill the mirror from the store
    pub async fn load(db: Arc<Database>) -> anyhow::Result<Self> {
        let students = db
            .load_all()
            .await
            .context("Failed to load students from the store")?;
        let mirror = StudentMirror::new(students);
        if mirror.is_empty().await {
            info!("Store is empty, starting with no students");
        } else {
            info!("Loaded {} students into memory", mirror.len().await);
        }

        Ok(Self { db, mirror })
    }

    pub async fn list(&self) -> Vec<Student> {
        self.mirror.snapshot().await
    }

    pub async fn get(&self, id: i64) -> Result<Student> {
        debug!("Looking up student {}", id);
        self.mirror.find(id).await.ok_or(EtudiantError::NotFound(id))
    }

    /// Returns the whole list after the insert
    pub async fn create(&self, student: NewStudent) -> Result<Vec<Student>> {
        let mut students = self.mirror.write().await;

        let id = self
            .db
            .insert(&student.nom, student.age)
            .await
            .map_err(persistence)?;
        info!("Created student {}: nom={}, age={}", id, student.nom, student.age);

        students.insert(id, Student::new(id, student));
        Ok(students.values().cloned().collect())
    }

    pub async fn update(&self, id: i64, changes: StudentChanges) -> Result<Student> {
        let mut students = self.mirror.write().await;

        let updated = students
            .get(&id)
            .ok_or(EtudiantError::NotFound(id))?
            .merged(&changes);

        self.db
            .update(id, &updated.nom, updated.age)
            .await
            .map_err(persistence)?;
        info!("Updated student {}: nom={}, age={}", id, updated.nom, updated.age);

        students.insert(id, updated.clone());
        Ok(updated)
    }

    /// Returns the id that was removed
    pub async fn delete(&self, id: i64) -> Result<i64> {
        let mut students = self.mirror.write().await;

        if !students.contains_key(&id) {
            return Err(EtudiantError::NotFound(id));
        }

        self.db.delete(id).await.map_err(persistence)?;
        info!("Deleted student {}", id);

        students.remove(&id);
        Ok(id)
    }
}

fn persistence(err: anyhow::Error) -> EtudiantError {
    error!("Store statement failed: {:#}", err);
    EtudiantError::Persistence(format!("{:#}", err))
}

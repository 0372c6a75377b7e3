//! In-memory mirror of the etudiants table

use etudiants_types::Student;
use std::collections::BTreeMap;
use tokio::sync::{RwLock, RwLockWriteGuard};

/// Every stored student, keyed and ordered by id
pub struct StudentMirror {
    students: RwLock<BTreeMap<i64, Student>>,
}

impl StudentMirror {
    pub fn new(students: Vec<Student>) -> Self {
        Self {
            students: RwLock::new(students.into_iter().map(|s| (s.id, s)).collect()),
        }
    }

    /// All students, ascending id
    pub async fn snapshot(&self) -> Vec<Student> {
        self.students.read().await.values().cloned().collect()
    }

    pub async fn find(&self, id: i64) -> Option<Student> {
        self.students.read().await.get(&id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.students.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Exclusive access for a mutation; readers wait until it is dropped
    pub async fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<i64, Student>> {
        self.students.write().await
    }
}

//! Student types

use serde::{Deserialize, Serialize};

/// A student row, as stored and as served
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Assigned by the store, never changes
    pub id: i64,
    pub nom: String,
    pub age: i64,
}

impl Student {
    pub fn new(id: i64, student: NewStudent) -> Self {
        Self {
            id,
            nom: student.nom,
            age: student.age,
        }
    }

    /// Apply a partial update, keeping current values for absent fields
    pub fn merged(&self, changes: &StudentChanges) -> Self {
        Self {
            id: self.id,
            nom: changes.nom.clone().unwrap_or_else(|| self.nom.clone()),
            age: changes.age.unwrap_or(self.age),
        }
    }
}

/// A validated student that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub nom: String,
    pub age: i64,
}

/// Validated fields of an update; at least one is set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentChanges {
    pub nom: Option<String>,
    pub age: Option<i64>,
}

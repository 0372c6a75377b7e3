//! Request bodies and their validation
//!
//! Bodies are built from a JSON object only; each value is checked field by
//! field so a wrong type is reported per field as a 400.

use crate::error::{EtudiantError, FieldError, Result};
use crate::student::{NewStudent, StudentChanges};
use serde_json::{Map, Value};

pub const MISSING_CREATE_FIELDS: &str = "Données invalides. Il faut un nom et un âge.";
pub const MISSING_UPDATE_FIELDS: &str =
    "Données invalides. Il faut au moins un nom ou un âge à modifier.";
pub const INVALID_FIELDS: &str = "Données invalides. Vérifiez les champs signalés.";

/// Body of `POST /ajouter`
#[derive(Debug, Default)]
pub struct CreateStudentRequest {
    pub nom: Option<Value>,
    pub age: Option<Value>,
}

impl From<Map<String, Value>> for CreateStudentRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            nom: take_field(&mut body, "nom"),
            age: take_field(&mut body, "age"),
        }
    }
}

impl CreateStudentRequest {
    /// Both fields are required
    pub fn validate(self) -> Result<NewStudent> {
        let (Some(nom), Some(age)) = (self.nom, self.age) else {
            return Err(EtudiantError::validation(MISSING_CREATE_FIELDS, vec![]));
        };

        let mut fields = Vec::new();
        let nom = check(&mut fields, "nom", coerce_nom(&nom));
        let age = check(&mut fields, "age", coerce_age(&age));

        match (nom, age) {
            (Some(nom), Some(age)) => Ok(NewStudent { nom, age }),
            _ => Err(EtudiantError::validation(INVALID_FIELDS, fields)),
        }
    }
}

/// Body of `PUT /etudiants/modifier/{id}`
#[derive(Debug, Default)]
pub struct UpdateStudentRequest {
    pub nom: Option<Value>,
    pub age: Option<Value>,
}

impl From<Map<String, Value>> for UpdateStudentRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            nom: take_field(&mut body, "nom"),
            age: take_field(&mut body, "age"),
        }
    }
}

impl UpdateStudentRequest {
    /// At least one field is required; those present must be valid
    pub fn validate(self) -> Result<StudentChanges> {
        if self.nom.is_none() && self.age.is_none() {
            return Err(EtudiantError::validation(MISSING_UPDATE_FIELDS, vec![]));
        }

        let mut fields = Vec::new();
        let nom = self
            .nom
            .as_ref()
            .and_then(|v| check(&mut fields, "nom", coerce_nom(v)));
        let age = self
            .age
            .as_ref()
            .and_then(|v| check(&mut fields, "age", coerce_age(v)));

        if !fields.is_empty() {
            return Err(EtudiantError::validation(INVALID_FIELDS, fields));
        }
        Ok(StudentChanges { nom, age })
    }
}

/// `null` counts as absent
fn take_field(body: &mut Map<String, Value>, key: &str) -> Option<Value> {
    body.remove(key).filter(|v| !v.is_null())
}

fn check<T>(
    fields: &mut Vec<FieldError>,
    field: &'static str,
    value: std::result::Result<T, String>,
) -> Option<T> {
    match value {
        Ok(v) => Some(v),
        Err(message) => {
            fields.push(FieldError::new(field, message));
            None
        }
    }
}

fn coerce_nom(value: &Value) -> std::result::Result<String, String> {
    let nom = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return Err("le nom doit être une chaîne de caractères".to_string()),
    };
    if nom.is_empty() {
        return Err("le nom ne peut pas être vide".to_string());
    }
    Ok(nom)
}

fn coerce_age(value: &Value) -> std::result::Result<i64, String> {
    const NOT_AN_INTEGER: &str = "l'âge doit être un nombre entier";

    match value {
        Value::Number(n) => {
            if let Some(age) = n.as_i64() {
                return Ok(age);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 => {
                    Ok(f as i64)
                }
                _ => Err(NOT_AN_INTEGER.to_string()),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| NOT_AN_INTEGER.to_string()),
        _ => Err(NOT_AN_INTEGER.to_string()),
    }
}

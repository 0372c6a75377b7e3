//! Etudiants Types - Pure type definitions
//!
//! Student records, request schemas and their boundary validation. Nothing
//! here depends on the async runtime or the store.

pub mod error;
pub mod request;
pub mod student;

pub use error::{EtudiantError, FieldError, Result, NOT_FOUND_MESSAGE};
pub use request::{CreateStudentRequest, UpdateStudentRequest};
pub use student::{NewStudent, Student, StudentChanges};

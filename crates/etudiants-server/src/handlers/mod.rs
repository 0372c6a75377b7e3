//! HTTP handlers

pub mod error;
pub mod health;
pub mod students;

pub use error::{ApiError, Operation};
pub use health::health;

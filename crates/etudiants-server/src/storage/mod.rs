//! Storage layer
//!
//! SQLite (embedded) is the store; `StudentMirror` keeps every row in memory
//! for reads.

pub mod db;
pub mod mirror;

pub use db::Database;
pub use mirror::StudentMirror;

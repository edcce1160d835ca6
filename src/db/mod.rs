//! Database module for SQLite operations.
//!
//! This module provides:
//! - Connection pool setup and SQLite pragma configuration
//! - Repository layer implementing the two storage layouts

pub mod migrations;
pub mod repo;

pub use migrations::init_db;
pub use repo::{ColumnRepository, DocumentRepository, PersonStore};

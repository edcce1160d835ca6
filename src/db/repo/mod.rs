//! Repository layer for person storage.
//!
//! Two layouts implement the same `PersonStore` trait:
//! - `columns.rs` - one column per field, engine-assigned ids
//! - `document.rs` - one JSON document per row, caller-assigned ids

mod columns;
mod document;

pub use columns::ColumnRepository;
pub use document::DocumentRepository;

use crate::domain::Person;
use crate::error::StoreError;
use async_trait::async_trait;

/// Durable storage for `Person` entities.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// Idempotently ensure the backing table exists.
    ///
    /// # Errors
    /// Returns an error if schema creation fails.
    async fn migrate(&self) -> Result<(), StoreError>;

    /// Insert one person.
    ///
    /// Returns the stored person including any engine-assigned id.
    ///
    /// # Errors
    /// Returns `StoreError::Duplicate` on a uniqueness violation,
    /// otherwise passes the storage error through.
    async fn create(&self, person: Person) -> Result<Person, StoreError>;

    /// Fetch one person by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if no such row exists.
    async fn get(&self, id: i64) -> Result<Person, StoreError>;

    /// Retrieve every stored person, in storage-defined order.
    ///
    /// # Errors
    /// Returns an error if the scan fails or a stored document cannot
    /// be decoded.
    async fn all(&self) -> Result<Vec<Person>, StoreError>;

    /// Rewrite name and age for `person.id`.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row was affected.
    async fn update(&self, person: &Person) -> Result<(), StoreError>;

    /// Remove one person by id.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` when no row was affected.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}

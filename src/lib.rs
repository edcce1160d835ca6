pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::{Config, StorageMode};
pub use db::{init_db, ColumnRepository, DocumentRepository, PersonStore};
pub use domain::Person;
pub use error::StoreError;

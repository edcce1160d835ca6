//! JSON-document person storage.

use crate::domain::Person;
use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use super::PersonStore;

/// Person repository storing each record as a JSON document.
///
/// The caller assigns the id, which doubles as the primary key; name
/// and age are opaque to the storage engine and live inside the
/// serialized document.
pub struct DocumentRepository {
    pool: SqlitePool,
}

impl DocumentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        DocumentRepository { pool }
    }

    fn encode(person: &Person, id: i64) -> Result<String, StoreError> {
        serde_json::to_string(person).map_err(|source| StoreError::EncodeDocument { id, source })
    }

    fn decode(doc: &str, id: i64) -> Result<Person, StoreError> {
        serde_json::from_str(doc).map_err(|source| StoreError::MalformedDocument { id, source })
    }
}

#[async_trait]
impl PersonStore for DocumentRepository {
    async fn migrate(&self) -> Result<(), StoreError> {
        let schema_sql = include_str!("../schema_people_docs.sql");
        for statement in schema_sql.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(&self.pool).await?;
            }
        }
        Ok(())
    }

    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        let id = person.id.ok_or(StoreError::MissingId)?;
        let doc = Self::encode(&person, id)?;

        sqlx::query("INSERT INTO people_docs (id, doc) VALUES (?, ?)")
            .bind(id)
            .bind(doc)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(person)
    }

    async fn get(&self, id: i64) -> Result<Person, StoreError> {
        let row = sqlx::query("SELECT doc FROM people_docs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        let doc: String = row.get("doc");
        Self::decode(&doc, id)
    }

    async fn all(&self) -> Result<Vec<Person>, StoreError> {
        let rows = sqlx::query("SELECT id, doc FROM people_docs")
            .fetch_all(&self.pool)
            .await?;

        let mut all = Vec::with_capacity(rows.len());
        for row in &rows {
            let id: i64 = row.get("id");
            let doc: String = row.get("doc");
            all.push(Self::decode(&doc, id)?);
        }
        Ok(all)
    }

    async fn update(&self, person: &Person) -> Result<(), StoreError> {
        let id = person.id.ok_or(StoreError::MissingId)?;
        let doc = Self::encode(person, id)?;

        let result = sqlx::query("UPDATE people_docs SET doc = ? WHERE id = ?")
            .bind(doc)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM people_docs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

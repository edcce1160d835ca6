//! Column-per-field person storage.

use crate::domain::Person;
use crate::error::StoreError;
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use sqlx::Row;

use super::PersonStore;

/// Person repository storing one column per field.
///
/// Ids are assigned by the storage engine on create; names are unique
/// across all rows, enforced by the schema.
pub struct ColumnRepository {
    pool: SqlitePool,
}

impl ColumnRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        ColumnRepository { pool }
    }
}

#[async_trait]
impl PersonStore for ColumnRepository {
    async fn migrate(&self) -> Result<(), StoreError> {
        let schema_sql = include_str!("../schema_people.sql");
        for statement in schema_sql.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed).execute(&self.pool).await?;
            }
        }
        Ok(())
    }

    async fn create(&self, person: Person) -> Result<Person, StoreError> {
        let result = sqlx::query("INSERT INTO people (name, age) VALUES (?, ?)")
            .bind(&person.name)
            .bind(person.age)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        Ok(Person {
            id: Some(result.last_insert_rowid()),
            ..person
        })
    }

    async fn get(&self, id: i64) -> Result<Person, StoreError> {
        let row = sqlx::query("SELECT id, name, age FROM people WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        Ok(Person {
            id: Some(row.get("id")),
            name: row.get("name"),
            age: row.get("age"),
        })
    }

    async fn all(&self) -> Result<Vec<Person>, StoreError> {
        let rows = sqlx::query("SELECT id, name, age FROM people")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Person {
                id: Some(row.get("id")),
                name: row.get("name"),
                age: row.get("age"),
            })
            .collect())
    }

    async fn update(&self, person: &Person) -> Result<(), StoreError> {
        let id = person.id.ok_or(StoreError::MissingId)?;

        let result = sqlx::query("UPDATE people SET name = ?, age = ? WHERE id = ?")
            .bind(&person.name)
            .bind(person.age)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM people WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}

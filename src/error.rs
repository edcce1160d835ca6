use thiserror::Error;

/// Errors returned by person store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record already exists")]
    Duplicate,
    #[error("no person with id {0}")]
    NotFound(i64),
    #[error("operation requires a person id")]
    MissingId,
    #[error("failed to encode person {id} as a document")]
    EncodeDocument {
        id: i64,
        #[source]
        source: serde_json::Error,
    },
    #[error("stored document for id {id} is malformed")]
    MalformedDocument {
        id: i64,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Translate a sqlx error, surfacing unique-constraint violations
    /// as `Duplicate`.
    ///
    /// SQLite reports constraint subtypes through extended result codes:
    /// 2067 is SQLITE_CONSTRAINT_UNIQUE, 1555 is SQLITE_CONSTRAINT_PRIMARYKEY.
    pub(crate) fn from_sqlx(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if let Some(code) = db_err.code() {
                if code == "2067" || code == "1555" {
                    return StoreError::Duplicate;
                }
            }
        }
        StoreError::Database(err)
    }
}

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub storage_mode: StorageMode,
}

/// How persons are laid out in the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMode {
    /// One column per field, engine-assigned ids, unique names.
    Columns,
    /// One JSON document per row, caller-assigned ids.
    Document,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let database_path = env_map
            .get("DATABASE_PATH")
            .cloned()
            .unwrap_or_else(|| "people.db".to_string());

        let storage_mode = match env_map
            .get("STORAGE_MODE")
            .map(|s| s.as_str())
            .unwrap_or("columns")
        {
            "columns" => StorageMode::Columns,
            "document" => StorageMode::Document,
            other => {
                return Err(ConfigError::InvalidValue(
                    "STORAGE_MODE".to_string(),
                    format!("must be columns or document, got {}", other),
                ))
            }
        };

        Ok(Config {
            database_path,
            storage_mode,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_map(HashMap::new()).unwrap();
        assert_eq!(config.database_path, "people.db");
        assert_eq!(config.storage_mode, StorageMode::Columns);
    }

    #[test]
    fn test_explicit_values() {
        let mut env_map = HashMap::new();
        env_map.insert("DATABASE_PATH".to_string(), "/tmp/people.db".to_string());
        env_map.insert("STORAGE_MODE".to_string(), "document".to_string());
        let config = Config::from_env_map(env_map).unwrap();
        assert_eq!(config.database_path, "/tmp/people.db");
        assert_eq!(config.storage_mode, StorageMode::Document);
    }

    #[test]
    fn test_invalid_storage_mode() {
        let mut env_map = HashMap::new();
        env_map.insert("STORAGE_MODE".to_string(), "blob".to_string());
        let result = Config::from_env_map(env_map);
        match result {
            Err(ConfigError::InvalidValue(k, _)) => assert_eq!(k, "STORAGE_MODE"),
            _ => panic!("Expected InvalidValue error"),
        }
    }
}

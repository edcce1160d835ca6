//! Person entity.

use serde::{Deserialize, Serialize};

/// A person record.
///
/// `id` is `None` until one is assigned: the columns layout assigns it
/// on create, the document layout requires the caller to supply it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<i64>,
    pub name: String,
    pub age: i64,
}

impl Person {
    /// Create a person without an id.
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Person {
            id: None,
            name: name.into(),
            age,
        }
    }

    /// Create a person with a caller-assigned id.
    pub fn with_id(id: i64, name: impl Into<String>, age: i64) -> Self {
        Person {
            id: Some(id),
            name: name.into(),
            age,
        }
    }
}

impl std::fmt::Display for Person {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.id {
            Some(id) => write!(f, "#{} {} ({})", id, self.name, self.age),
            None => write!(f, "{} ({})", self.name, self.age),
        }
    }
}

//! Project record as returned by the API.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A project as the server reports it.
/// Identity is `id`; the client never edits or deletes records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Server-assigned identifier
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Any other fields the server sends (status, dates, budget, ...),
    /// carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Project {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            created_at: None,
            extra: Map::new(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

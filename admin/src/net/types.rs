//! Wire DTOs for the catalog backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (`cat_id`, `col_code`, ...)
//! so rows deserialize without renames. Identifiers arrive as either numbers
//! or strings depending on the table, so they are normalized to strings.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// Product category row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(deserialize_with = "deserialize_id")]
    pub cat_id: String,
    pub cat_name: String,
}

/// Color row; the hex code doubles as its identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub col_code: String,
    pub col_name: String,
}

/// Size row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    #[serde(deserialize_with = "deserialize_id")]
    pub size_id: String,
    pub size_name: String,
}

/// Result of the create-product call.
#[derive(Clone, Debug, PartialEq)]
pub struct CreateProductResponse {
    pub status: u16,
    pub body: Option<serde_json::Value>,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(i64),
        Text(String),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(n) => n.to_string(),
        RawId::Text(s) => s,
    })
}

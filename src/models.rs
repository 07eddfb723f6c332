//! Frontend Models
//!
//! Data structures exchanged with the tags API.

use serde::{Deserialize, Serialize};

/// Tag data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    /// Server-assigned stable identifier
    pub hash: String,
}

/// Body of `POST /tags`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_ignores_extra_fields() {
        let tag: Tag = serde_json::from_str(
            r#"{"name":"sprint","hash":"a1","deleted":false,"createdAt":"2023-04-01"}"#,
        )
        .unwrap();
        assert_eq!(tag, Tag { name: "sprint".into(), hash: "a1".into() });
    }

    #[test]
    fn test_create_body_shape() {
        let body = serde_json::to_value(CreateTag { name: "sprint".into() }).unwrap();
        assert_eq!(body, serde_json::json!({ "name": "sprint" }));
    }
}

use serde::{Deserialize, Serialize};

/// A portfolio project as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Backend-issued identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Display title.
    pub title: String,

    /// Short description shown on the project card.
    #[serde(default)]
    pub description: String,

    /// Cover image URL.
    #[serde(default)]
    pub image_url: String,

    /// Optional external link to the live project.
    #[serde(default)]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_deserializes_backend_payload() {
        let json = r#"{
            "_id": "p1",
            "title": "Atelier",
            "description": "A portfolio site",
            "imageUrl": "https://example.com/cover.png",
            "link": "https://example.com"
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id, "p1");
        assert_eq!(project.title, "Atelier");
        assert_eq!(project.image_url, "https://example.com/cover.png");
        assert_eq!(project.link.as_deref(), Some("https://example.com"));
    }

    #[test]
    fn project_tolerates_missing_optional_fields() {
        let json = r#"{ "_id": "p2", "title": "Bare" }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.description, "");
        assert_eq!(project.image_url, "");
        assert!(project.link.is_none());
    }

    #[test]
    fn project_serializes_camel_case() {
        let project = Project {
            id: "p3".to_string(),
            title: "Wire".to_string(),
            description: "d".to_string(),
            image_url: "i".to_string(),
            link: None,
        };

        let value = serde_json::to_value(&project).unwrap();
        assert!(value.get("imageUrl").is_some());
        assert!(value.get("image_url").is_none());
        assert_eq!(value.get("_id").and_then(|v| v.as_str()), Some("p3"));
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post, including its comment thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Backend-issued identifier.
    #[serde(rename = "_id")]
    pub id: String,

    /// Post title.
    pub title: String,

    /// Author display name.
    #[serde(default)]
    pub author: String,

    /// Post body. May contain HTML produced by the admin editor.
    #[serde(default)]
    pub content: String,

    /// Publication timestamp.
    pub created_at: DateTime<Utc>,

    /// Reader comments, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// A single reader comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Commenter display name.
    pub user: String,

    /// Comment body.
    pub text: String,

    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting a new comment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentRequest {
    /// Commenter display name.
    pub user: String,

    /// Comment body.
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_deserializes_backend_payload() {
        let json = r#"{
            "_id": "b1",
            "title": "Hello",
            "author": "Ada",
            "content": "First post",
            "createdAt": "2026-01-05T09:30:00Z",
            "comments": [
                { "user": "Reader", "text": "Nice!", "createdAt": "2026-01-06T10:00:00Z" }
            ]
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "b1");
        assert_eq!(post.author, "Ada");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].user, "Reader");
    }

    #[test]
    fn post_tolerates_missing_comments_and_author() {
        let json = r#"{
            "_id": "b2",
            "title": "Bare",
            "createdAt": "2026-01-05T09:30:00Z"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.author, "");
        assert_eq!(post.content, "");
        assert!(post.comments.is_empty());
    }

    #[test]
    fn comment_request_sends_exactly_two_fields() {
        let request = CommentRequest {
            user: "Reader".to_string(),
            text: "Hello".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(object.get("user").and_then(|v| v.as_str()), Some("Reader"));
        assert_eq!(object.get("text").and_then(|v| v.as_str()), Some("Hello"));
    }
}

use crate::config::FrontendConfig;
use async_trait::async_trait;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde_json::Value;
use shared::models::{
    Comment, CommentRequest, ContactRequest, LoginRequest, LoginResponse, MessageResponse, Post,
    Project, RegisterRequest,
};
use std::sync::{Arc, Mutex};
use thiserror::Error;

thread_local! {
    static SHARED_CLIENT: OnceCell<PortfolioClient> = OnceCell::new();
}

/// How an outbound call failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("could not reach the server: {0}")]
    Network(String),
    /// The server rejected the request (4xx).
    #[error("request rejected ({0})")]
    Client(u16),
    /// The server failed to process the request (5xx).
    #[error("server error ({0})")]
    Server(u16),
    /// The response arrived but its body was not what we expected.
    #[error("unexpected response body")]
    Decode,
}

impl ApiError {
    /// Categorize a non-success HTTP status.
    pub(crate) fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_client_error() {
            Some(Self::Client(status.as_u16()))
        } else if status.is_server_error() {
            Some(Self::Server(status.as_u16()))
        } else {
            None
        }
    }

    /// The HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Client(status) | Self::Server(status) => Some(*status),
            Self::Network(_) | Self::Decode => None,
        }
    }
}

/// The single outbound channel to the backend.
///
/// The session manager injects the bearer credential here; every other
/// component issues calls through it without touching auth state.
#[async_trait(?Send)]
pub trait Gateway {
    /// GET `path`, returning the decoded JSON body.
    async fn get(&self, path: &str) -> Result<Value, ApiError>;
    /// POST `body` to `path`.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    /// PUT `body` to `path`.
    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError>;
    /// DELETE `path`.
    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}

/// Lightweight API client for the portfolio backend.
#[derive(Clone, Debug)]
pub struct PortfolioClient {
    base_url: String,
    client: Client,
    credential: Arc<Mutex<Option<String>>>,
}

impl PortfolioClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// The process-wide client instance.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Replace the default bearer credential carried by every call.
    /// `None` drops the Authorization header entirely.
    pub fn set_credential(&self, token: Option<String>) {
        if let Ok(mut guard) = self.credential.lock() {
            *guard = token;
        }
    }

    /// The currently configured bearer credential, if any.
    pub fn current_credential(&self) -> Option<String> {
        self.credential
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().cloned())
    }

    fn apply_credential(&self, request: RequestBuilder) -> RequestBuilder {
        if let Some(token) = self.current_credential() {
            request.header("Authorization", format!("Bearer {token}"))
        } else {
            request
        }
    }

    async fn send(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let response = self
            .apply_credential(request)
            .send()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;

        if let Some(error) = ApiError::from_status(response.status()) {
            return Err(error);
        }

        let text = response
            .text()
            .await
            .map_err(|error| ApiError::Network(error.to_string()))?;
        parse_body(&text)
    }

    /// Authenticate with username/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let body = encode(payload)?;
        decode(self.post("/users/login", &body).await?)
    }

    /// Create a new admin account.
    pub async fn register(&self, payload: &RegisterRequest) -> Result<MessageResponse, ApiError> {
        let body = encode(payload)?;
        decode(self.post("/users/register", &body).await?)
    }

    /// Submit the public contact form.
    pub async fn send_contact(&self, payload: &ContactRequest) -> Result<MessageResponse, ApiError> {
        let body = encode(payload)?;
        decode(self.post("/contact", &body).await?)
    }

    /// Fetch every portfolio project.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        decode(self.get("/projects").await?)
    }

    /// Fetch every blog post.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        decode(self.get("/blog").await?)
    }

    /// Fetch a single blog post with its comments.
    pub async fn get_post(&self, id: &str) -> Result<Post, ApiError> {
        decode(self.get(&format!("/blog/{id}")).await?)
    }

    /// Submit a comment on a post.
    ///
    /// Returns the updated comment list when the backend sends one back;
    /// `None` means the caller should refetch the post instead.
    pub async fn add_comment(
        &self,
        post_id: &str,
        payload: &CommentRequest,
    ) -> Result<Option<Vec<Comment>>, ApiError> {
        let body = encode(payload)?;
        let response = self.post(&format!("/blog/{post_id}/comments"), &body).await?;
        comments_from_response(response)
    }
}

#[async_trait(?Send)]
impl Gateway for PortfolioClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.get(self.api_url(path))).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.post(self.api_url(path)).json(body))
            .await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(self.client.put(self.api_url(path)).json(body))
            .await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(self.client.delete(self.api_url(path))).await
    }
}

fn encode<T: serde::Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload).map_err(|_| ApiError::Decode)
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::Decode)
}

/// An empty body is a valid (null) response; anything else must be JSON.
fn parse_body(text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|_| ApiError::Decode)
}

/// Interpret the comment endpoint's reply. The backend may return the
/// full updated comment list or nothing useful at all; only an actual
/// array counts as data.
fn comments_from_response(response: Value) -> Result<Option<Vec<Comment>>, ApiError> {
    match response {
        Value::Array(_) => decode(response).map(Some),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_url_joins_without_duplicate_slashes() {
        let client = PortfolioClient::new("https://example.com/api/");
        assert_eq!(
            client.api_url("/projects"),
            "https://example.com/api/projects"
        );
        assert_eq!(client.api_url("blog/b1"), "https://example.com/api/blog/b1");
    }

    #[test]
    fn credential_slot_is_settable_and_clearable() {
        let client = PortfolioClient::new("/api");
        assert_eq!(client.current_credential(), None);

        client.set_credential(Some("tok".to_string()));
        assert_eq!(client.current_credential(), Some("tok".to_string()));

        client.set_credential(None);
        assert_eq!(client.current_credential(), None);
    }

    #[test]
    fn statuses_map_onto_the_error_taxonomy() {
        assert_eq!(
            ApiError::from_status(StatusCode::UNAUTHORIZED),
            Some(ApiError::Client(401))
        );
        assert_eq!(
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ApiError::Server(500))
        );
        assert_eq!(ApiError::from_status(StatusCode::OK), None);
        assert_eq!(ApiError::from_status(StatusCode::NO_CONTENT), None);
    }

    #[test]
    fn error_status_accessor() {
        assert_eq!(ApiError::Client(404).status(), Some(404));
        assert_eq!(ApiError::Server(502).status(), Some(502));
        assert_eq!(ApiError::Network("down".to_string()).status(), None);
        assert_eq!(ApiError::Decode.status(), None);
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body(""), Ok(Value::Null));
        assert_eq!(parse_body("  \n"), Ok(Value::Null));
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        assert_eq!(parse_body("<html>oops</html>"), Err(ApiError::Decode));
    }

    #[test]
    fn comment_reply_with_array_is_used_directly() {
        let response = json!([
            { "user": "Reader", "text": "Nice!", "createdAt": "2026-01-06T10:00:00Z" }
        ]);
        let comments = comments_from_response(response).unwrap().unwrap();
        assert_eq!(comments.len(), 1);
        assert_eq!(comments[0].user, "Reader");
    }

    #[test]
    fn comment_reply_without_array_falls_back_to_refetch() {
        assert_eq!(comments_from_response(Value::Null), Ok(None));
        assert_eq!(
            comments_from_response(json!({ "message": "ok" })),
            Ok(None)
        );
    }
}

use serde::{Deserialize, Serialize};

/// Payload of the public contact form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    /// Sender name.
    pub name: String,

    /// Sender email address.
    pub email: String,

    /// Message body.
    pub message: String,
}

/// Generic acknowledgement returned by write endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    /// Human-readable status message.
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_request_round_trips() {
        let request = ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        };

        let serialized = serde_json::to_string(&request).unwrap();
        let deserialized: ContactRequest = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, request);
    }
}

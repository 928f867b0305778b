use serde::{Deserialize, Serialize};

/// The identity record cached alongside the bearer token.
///
/// Only meaningful while a token is present; the two are always written
/// and cleared together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserProfile {
    /// Display name shown in the header.
    pub username: String,

    /// Role marker assigned by the backend (e.g. `admin`).
    #[serde(default)]
    pub role: String,
}

/// Credentials submitted by the login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,

    /// Account password.
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    /// Opaque bearer token. The client never interprets its contents.
    pub token: String,

    /// Profile of the authenticated account.
    pub user: UserProfile,
}

/// Payload for creating an admin account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,

    /// Contact email address.
    pub email: String,

    /// Account password.
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_response_round_trips() {
        let response = LoginResponse {
            token: "opaque-token".to_string(),
            user: UserProfile {
                username: "ada".to_string(),
                role: "admin".to_string(),
            },
        };

        let serialized = serde_json::to_string(&response).unwrap();
        let deserialized: LoginResponse = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, response);
    }

    #[test]
    fn user_profile_defaults_missing_role() {
        let profile: UserProfile = serde_json::from_str(r#"{ "username": "ada" }"#).unwrap();
        assert_eq!(profile.username, "ada");
        assert_eq!(profile.role, "");
    }
}

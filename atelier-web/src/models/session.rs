use shared::models::UserProfile;
use yewdux::Store;

/// Client-held session state derived from the token store.
///
/// Owned by the session manager; every other component reads it through
/// the store and never mutates it directly.
#[derive(Debug, Clone, PartialEq, Eq, Store)]
pub struct Session {
    /// Opaque bearer token, present only while authenticated.
    pub credential: Option<String>,
    /// Cached profile, meaningful only alongside a credential.
    pub user: Option<UserProfile>,
    /// True until the one-shot bootstrap read has completed.
    pub loading: bool,
}

impl Default for Session {
    // A fresh mount is loading until the token store has been read once.
    fn default() -> Self {
        Self {
            credential: None,
            user: None,
            loading: true,
        }
    }
}

/// The route guard's decision for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Session still loading; render a neutral placeholder, decide nothing.
    Pending,
    /// Render the protected subtree.
    Authenticated,
    /// Redirect to the login page.
    Anonymous,
}

impl Session {
    /// A settled session with no credential.
    pub fn anonymous() -> Self {
        Self {
            credential: None,
            user: None,
            loading: false,
        }
    }

    /// A settled session carrying a credential and its profile.
    pub fn authenticated(credential: String, user: UserProfile) -> Self {
        Self {
            credential: Some(credential),
            user: Some(user),
            loading: false,
        }
    }

    /// Guard decision for the current state, re-evaluated on every render.
    pub fn gate(&self) -> Gate {
        if self.loading {
            Gate::Pending
        } else if self.credential.is_some() {
            Gate::Authenticated
        } else {
            Gate::Anonymous
        }
    }
}

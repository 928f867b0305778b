use crate::api::PortfolioClient;
use crate::models::session::Session;
use crate::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};
use shared::models::UserProfile;

/// Owns every transition of the session lifecycle.
///
/// Sole writer of the token store and of the API client's default
/// credential. Everything else consumes the derived [`Session`] through
/// the yewdux store.
#[derive(Debug)]
pub struct SessionManager<S: KeyValueStore> {
    store: S,
    client: PortfolioClient,
}

impl<S: KeyValueStore> SessionManager<S> {
    /// Wire the manager to its persistence and its outbound channel.
    pub fn new(store: S, client: PortfolioClient) -> Self {
        Self { store, client }
    }

    /// Derive the initial session from the token store.
    ///
    /// Runs once per mount. A missing, partial, or unparsable cached pair
    /// yields an anonymous session; bootstrap itself never fails, so a
    /// corrupted cache cannot take down startup.
    pub fn bootstrap(&self) -> Session {
        let token = self.store.get(TOKEN_KEY).filter(|token| !token.is_empty());
        let user = self
            .store
            .get(USER_KEY)
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok());

        match (token, user) {
            (Some(token), Some(user)) => {
                self.client.set_credential(Some(token.clone()));
                Session::authenticated(token, user)
            }
            // One key without the other is not a session.
            _ => Session::anonymous(),
        }
    }

    /// Persist a freshly obtained credential/profile pair and switch the
    /// session to authenticated. Performs no server round-trip; the
    /// caller already holds the pair from the authentication call.
    pub fn login(&self, token: String, user: UserProfile) -> Session {
        if let Ok(raw) = serde_json::to_string(&user) {
            // Written together with the token so the pair invariant holds.
            self.store.set(TOKEN_KEY, &token);
            self.store.set(USER_KEY, &raw);
        }
        self.client.set_credential(Some(token.clone()));
        Session::authenticated(token, user)
    }

    /// Clear both persisted values and drop the outbound credential.
    /// Idempotent: logging out while anonymous changes nothing.
    pub fn logout(&self) -> Session {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
        self.client.set_credential(None);
        Session::anonymous()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::session::Gate;
    use crate::storage::testing::MemoryStorage;

    fn profile() -> UserProfile {
        UserProfile {
            username: "ada".to_string(),
            role: "admin".to_string(),
        }
    }

    fn manager(store: &MemoryStorage) -> SessionManager<&MemoryStorage> {
        SessionManager::new(store, PortfolioClient::new("/api"))
    }

    #[test]
    fn bootstrap_restores_a_valid_cached_pair() {
        let store = MemoryStorage::with(&[
            (TOKEN_KEY, "cached-token"),
            (USER_KEY, r#"{ "username": "ada", "role": "admin" }"#),
        ]);
        let manager = manager(&store);

        let session = manager.bootstrap();
        assert_eq!(session.gate(), Gate::Authenticated);
        assert!(!session.loading);
        assert_eq!(session.credential.as_deref(), Some("cached-token"));
        assert_eq!(session.user, Some(profile()));
        assert_eq!(
            manager.client.current_credential().as_deref(),
            Some("cached-token")
        );
    }

    #[test]
    fn bootstrap_with_empty_store_is_anonymous() {
        let store = MemoryStorage::default();
        let session = manager(&store).bootstrap();
        assert_eq!(session, Session::anonymous());
        assert!(!session.loading);
    }

    #[test]
    fn bootstrap_with_corrupted_profile_is_anonymous() {
        let store = MemoryStorage::with(&[(TOKEN_KEY, "cached-token"), (USER_KEY, "{not json")]);
        let manager = manager(&store);

        let session = manager.bootstrap();
        assert_eq!(session, Session::anonymous());
        assert_eq!(manager.client.current_credential(), None);
    }

    #[test]
    fn bootstrap_with_half_a_pair_is_anonymous() {
        let token_only = MemoryStorage::with(&[(TOKEN_KEY, "cached-token")]);
        assert_eq!(manager(&token_only).bootstrap(), Session::anonymous());

        let user_only =
            MemoryStorage::with(&[(USER_KEY, r#"{ "username": "ada", "role": "admin" }"#)]);
        assert_eq!(manager(&user_only).bootstrap(), Session::anonymous());
    }

    #[test]
    fn bootstrap_with_empty_token_is_anonymous() {
        let store = MemoryStorage::with(&[
            (TOKEN_KEY, ""),
            (USER_KEY, r#"{ "username": "ada", "role": "admin" }"#),
        ]);
        assert_eq!(manager(&store).bootstrap(), Session::anonymous());
    }

    #[test]
    fn login_persists_the_pair_and_configures_the_client() {
        let store = MemoryStorage::default();
        let manager = manager(&store);

        let session = manager.login("fresh-token".to_string(), profile());
        assert_eq!(session.gate(), Gate::Authenticated);
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("fresh-token"));
        assert!(store.get(USER_KEY).is_some());
        assert_eq!(
            manager.client.current_credential().as_deref(),
            Some("fresh-token")
        );

        // A second bootstrap from the same storage restores the session.
        let restored = manager.bootstrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn login_then_logout_round_trips_to_the_pre_login_state() {
        let store = MemoryStorage::default();
        let before = store.snapshot();
        let manager = manager(&store);

        manager.login("fresh-token".to_string(), profile());
        let session = manager.logout();

        assert_eq!(session, Session::anonymous());
        assert_eq!(store.snapshot(), before);
        assert_eq!(manager.client.current_credential(), None);
    }

    #[test]
    fn logout_while_anonymous_is_a_no_op() {
        let store = MemoryStorage::default();
        let manager = manager(&store);

        let first = manager.logout();
        let second = manager.logout();
        assert_eq!(first, second);
        assert!(store.snapshot().is_empty());
    }
}

//! Session-scoped auth state

use marketfeed_domain::{MarketError, Result, Session, User, UserRole};
use parking_lot::RwLock;

/// Holds the signed-in session for the lifetime of the client.
///
/// Nothing is persisted; a restart signs the user out.
#[derive(Debug, Default)]
pub struct AuthStore {
    session: RwLock<Option<Session>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, session: Session) {
        *self.session.write() = Some(session);
    }

    pub fn sign_out(&self) {
        *self.session.write() = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        self.session.read().as_ref().map(|s| s.user.clone())
    }

    /// The signed-in user, or `Auth` when nobody is signed in
    pub fn require_user(&self) -> Result<User> {
        self.current_user().ok_or_else(|| MarketError::Auth("You must be logged in".to_string()))
    }

    /// The signed-in user if they hold `role`.
    ///
    /// # Errors
    /// `Auth` when signed out, `Forbidden` when the role differs.
    pub fn require_role(&self, role: UserRole) -> Result<User> {
        let user = self.require_user()?;
        if user.role == role {
            Ok(user)
        } else {
            Err(MarketError::Forbidden(format!("{role} role required")))
        }
    }

    pub fn is_admin(&self) -> bool {
        self.current_user().is_some_and(|u| u.role == UserRole::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(role: UserRole) -> Session {
        Session {
            token: "mock-jwt-token".into(),
            user: User {
                id: "user1".into(),
                username: "MockUser".into(),
                email: "user@example.com".into(),
                role,
            },
        }
    }

    #[test]
    fn require_user_when_signed_out() {
        let store = AuthStore::new();
        assert_eq!(
            store.require_user().unwrap_err(),
            MarketError::Auth("You must be logged in".into())
        );
    }

    #[test]
    fn require_role_distinguishes_forbidden_from_unauthenticated() {
        let store = AuthStore::new();
        assert!(matches!(store.require_role(UserRole::Admin), Err(MarketError::Auth(_))));

        store.sign_in(session(UserRole::Customer));
        assert!(matches!(store.require_role(UserRole::Admin), Err(MarketError::Forbidden(_))));
        assert!(!store.is_admin());

        store.sign_in(session(UserRole::Admin));
        assert_eq!(store.require_role(UserRole::Admin).unwrap().id, "user1");
        assert!(store.is_admin());
    }

    #[test]
    fn sign_out_clears_session() {
        let store = AuthStore::new();
        store.sign_in(session(UserRole::Customer));
        assert!(store.is_authenticated());

        store.sign_out();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }
}

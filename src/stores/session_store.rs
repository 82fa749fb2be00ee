// ============================================================================
// SESSION STORE - token + cached user, one state struct
// ============================================================================
// Plain state for use_state handles; the use_session hook is the only place
// that reads or writes the persisted copy of this record.
// ============================================================================

use crate::models::{Role, SessionUser, StoredSession};

#[derive(Clone, Debug, PartialEq)]
pub struct SessionStore {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: Option<String>,
    /// Transient notice (session expiry, etc.) rendered as a toast.
    pub notice: Option<String>,
    /// True while the expiry redirect timer is running.
    pub expiring: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            loading: false,
            error: None,
            notice: None,
            expiring: false,
        }
    }
}

impl SessionStore {
    pub fn from_stored(stored: StoredSession) -> Self {
        Self {
            token: Some(stored.token),
            user: Some(stored.user),
            ..Self::default()
        }
    }

    pub fn signed_in(token: String, user: SessionUser) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
            ..Self::default()
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.display_name.as_str())
    }

    /// Token ready for the Authorization header. Older builds persisted the
    /// raw JSON string, so stored values may still carry wrapping quotes;
    /// this is the one place they get stripped.
    pub fn bearer_token(&self) -> Option<String> {
        let token = self.token.as_ref()?.trim().trim_matches('"').to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    /// First phase of the session guard: keep the current view up, show the
    /// notice, and block duplicate guards while the redirect timer runs.
    pub fn begin_expiry(&mut self, notice: &str) {
        self.notice = Some(notice.to_string());
        self.expiring = true;
    }

    /// Second phase: drop the in-memory session so the root component falls
    /// back to the sign-in view. The notice stays until dismissed.
    pub fn finish_expiry(&mut self) {
        self.token = None;
        self.user = None;
        self.loading = false;
        self.error = None;
        self.expiring = false;
    }

    /// The cached user record mutates in place when a profile save changes
    /// the display name.
    pub fn set_display_name(&mut self, name: String) {
        if let Some(user) = self.user.as_mut() {
            user.display_name = name;
        }
    }

    pub fn to_stored(&self) -> Option<StoredSession> {
        Some(StoredSession {
            token: self.token.clone()?,
            user: self.user.clone()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller_user() -> SessionUser {
        SessionUser {
            display_name: "Amara Okafor".to_string(),
            email: "amara@example.com".to_string(),
            role: Role::Seller,
        }
    }

    #[test]
    fn bearer_token_strips_wrapping_quotes() {
        let store = SessionStore::signed_in("\"tok-123\"".to_string(), seller_user());
        assert_eq!(store.bearer_token(), Some("tok-123".to_string()));

        let clean = SessionStore::signed_in("tok-456".to_string(), seller_user());
        assert_eq!(clean.bearer_token(), Some("tok-456".to_string()));
    }

    #[test]
    fn bearer_token_rejects_empty_values() {
        let store = SessionStore::signed_in("\"\"".to_string(), seller_user());
        assert_eq!(store.bearer_token(), None);
        assert_eq!(SessionStore::default().bearer_token(), None);
    }

    #[test]
    fn expiry_clears_the_session_and_keeps_the_notice() {
        let mut store = SessionStore::signed_in("tok-123".to_string(), seller_user());

        store.begin_expiry("Your session has expired. Please sign in again.");
        // The current view stays up while the redirect timer runs
        assert!(store.is_logged_in());
        assert!(store.expiring);
        assert!(store.notice.is_some());

        store.finish_expiry();
        assert!(!store.is_logged_in());
        assert!(store.token.is_none());
        assert!(store.user.is_none());
        assert!(!store.expiring);
        assert!(store.notice.is_some());
    }

    #[test]
    fn display_name_mutates_in_place() {
        let mut store = SessionStore::signed_in("tok-123".to_string(), seller_user());
        store.set_display_name("Amara O.".to_string());
        assert_eq!(store.display_name(), Some("Amara O."));
        assert_eq!(
            store.to_stored().map(|s| s.user.display_name),
            Some("Amara O.".to_string())
        );
    }
}

use std::sync::Arc;

use super::events::{AuthBus, AuthEvent};
use super::storage::TokenStore;
use crate::shared::error::is_auth_status;

/// The client session: one opaque bearer token plus the bus that announces
/// its creation and destruction.
///
/// Storage failures never surface to callers; they are logged and treated as
/// "no session".
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
    bus: AuthBus,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("bus", &self.bus).finish_non_exhaustive()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>, bus: AuthBus) -> Self {
        Self { store, bus }
    }

    pub fn bus(&self) -> &AuthBus {
        &self.bus
    }

    pub fn token(&self) -> Option<String> {
        match self.store.load() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log::warn!("token read failed: {e}");
                None
            }
        }
    }

    pub fn set_token(&self, token: &str) {
        if let Err(e) = self.store.save(token) {
            log::warn!("token write failed: {e}");
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.store.remove() {
            log::warn!("token removal failed: {e}");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Stores a freshly issued token and announces the login.
    pub fn begin(&self, token: &str) {
        self.set_token(token);
        self.bus.publish(AuthEvent::Login);
    }

    /// Explicit logout from the UI.
    pub fn end(&self) {
        self.clear();
        self.bus.publish(AuthEvent::Logout);
    }

    /// Inspects the status of an authenticated response. On 401/403 the
    /// session is destroyed and `true` is returned.
    pub fn observe_status(&self, status: u16) -> bool {
        if !is_auth_status(status) {
            return false;
        }
        log::warn!("request rejected with {status}, ending session");
        self.end();
        true
    }

    /// Value of the `Authorization` header; an absent token still yields
    /// `"Bearer "`.
    pub fn authorization_header(&self) -> String {
        bearer_value(self.token().as_deref())
    }
}

pub fn bearer_value(token: Option<&str>) -> String {
    format!("Bearer {}", token.unwrap_or_default())
}

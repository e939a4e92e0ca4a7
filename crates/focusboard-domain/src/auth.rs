//! Local sign-in against a pluggable credential check.

use async_trait::async_trait;
use focusboard_core::{FocusResult, JsonStoreExt, SharedStore, StorageKey};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// The matching user, or `None` when the pair is not accepted.
    async fn verify(&self, email: &str, password: &str) -> Option<User>;
}

pub const DEMO_EMAIL: &str = "joao@example.com";
pub const DEMO_PASSWORD: &str = "123456";

/// Accepts the single demo account after an artificial delay.
#[derive(Debug, Clone)]
pub struct DemoCredentialVerifier {
    delay: Duration,
}

impl DemoCredentialVerifier {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn demo_user() -> User {
        User {
            id: "1".to_string(),
            name: "João Silva".to_string(),
            email: DEMO_EMAIL.to_string(),
            avatar: Some("https://api.dicebear.com/7.x/avataaars/svg?seed=João".to_string()),
        }
    }
}

impl Default for DemoCredentialVerifier {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl CredentialVerifier for DemoCredentialVerifier {
    async fn verify(&self, email: &str, password: &str) -> Option<User> {
        tokio::time::sleep(self.delay).await;
        (email == DEMO_EMAIL && password == DEMO_PASSWORD).then(Self::demo_user)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    Anonymous,
    /// A credential check is in flight.
    Pending,
    Authenticated(User),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated(User),
    MissingFields,
    InvalidCredentials,
    AlreadyPending,
}

impl LoginOutcome {
    /// Translation key of the field-level message shown for a refusal.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            Self::Authenticated(_) => None,
            Self::MissingFields => Some("auth.fillAllFields"),
            Self::InvalidCredentials => Some("auth.invalidCredentials"),
            Self::AlreadyPending => Some("auth.loggingIn"),
        }
    }
}

pub struct AuthService {
    storage: SharedStore,
    verifier: Arc<dyn CredentialVerifier>,
    state: Mutex<AuthState>,
}

impl AuthService {
    /// Restore the saved session. A malformed entry is dropped from storage.
    pub fn load(storage: SharedStore, verifier: Arc<dyn CredentialVerifier>) -> FocusResult<Self> {
        let key = StorageKey::AuthUser;
        let state = match storage.get_raw(key.as_str()) {
            Ok(Some(raw)) => match serde_json::from_str::<User>(&raw) {
                Ok(user) => AuthState::Authenticated(user),
                Err(e) => {
                    tracing::error!("Error loading saved user: {}", e);
                    storage.clear(key)?;
                    AuthState::Anonymous
                }
            },
            Ok(None) => AuthState::Anonymous,
            Err(e) => {
                tracing::warn!("Could not read {}: {}", key, e);
                AuthState::Anonymous
            }
        };

        Ok(Self {
            storage,
            verifier,
            state: Mutex::new(state),
        })
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().clone()
    }

    pub fn current_user(&self) -> Option<User> {
        match &*self.state.lock() {
            AuthState::Authenticated(user) => Some(user.clone()),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(*self.state.lock(), AuthState::Authenticated(_))
    }

    /// Check the credentials and, on success, save the session.
    ///
    /// While a check is in flight the state is [`AuthState::Pending`] and
    /// further attempts are refused. A refused or failed attempt restores
    /// the state held before it.
    pub async fn login(&self, email: &str, password: &str) -> FocusResult<LoginOutcome> {
        if email.trim().is_empty() || password.is_empty() {
            return Ok(LoginOutcome::MissingFields);
        }

        let previous = {
            let mut state = self.state.lock();
            if *state == AuthState::Pending {
                return Ok(LoginOutcome::AlreadyPending);
            }
            std::mem::replace(&mut *state, AuthState::Pending)
        };

        let Some(user) = self.verifier.verify(email.trim(), password).await else {
            tracing::info!("Rejected sign-in for {}", email.trim());
            *self.state.lock() = previous;
            return Ok(LoginOutcome::InvalidCredentials);
        };

        if let Err(e) = self.storage.save(StorageKey::AuthUser, &user) {
            *self.state.lock() = previous;
            return Err(e);
        }

        tracing::info!("Signed in as {}", user.email);
        *self.state.lock() = AuthState::Authenticated(user.clone());
        Ok(LoginOutcome::Authenticated(user))
    }

    /// Forget the session and wipe every persisted entry.
    pub fn logout(&self) -> FocusResult<()> {
        *self.state.lock() = AuthState::Anonymous;
        for key in StorageKey::ALL {
            self.storage.clear(key)?;
        }
        tracing::info!("Signed out; local data cleared");
        Ok(())
    }
}

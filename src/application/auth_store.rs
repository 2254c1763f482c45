use crate::domain::errors::AuthError;
use crate::domain::ports::KeyValueStorage;
use crate::domain::user::User;

/// Storage key holding the JSON-serialized authenticated user. Its presence
/// is what the navigation layer treats as "logged in".
pub const USER_KEY: &str = "user";

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

/// Session state for the single built-in administrator account, persisted
/// through an injected key/value collaborator.
pub struct AuthStore<S> {
    storage: S,
    user: Option<User>,
    is_authenticated: bool,
}

impl<S: KeyValueStorage> AuthStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            user: None,
            is_authenticated: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// Literal credential check against the built-in account. On success the
    /// user record is persisted so a later [`AuthStore::init`] restores the
    /// session.
    pub fn login(&mut self, username: &str, password: &str) -> Result<User, AuthError> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            return Err(AuthError::InvalidCredentials);
        }

        let user = User::admin();
        let json = serde_json::to_string(&user).map_err(|e| {
            log::error!("could not serialize session record: {}", e);
            AuthError::Storage(e.to_string())
        })?;
        self.storage.set(USER_KEY, json).map_err(|e| {
            log::error!("could not persist session record: {}", e);
            AuthError::Storage(e.to_string())
        })?;

        log::info!("{} logged in", user.username);
        self.user = Some(user.clone());
        self.is_authenticated = true;
        Ok(user)
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("{} logged out", user.username);
        }
        self.is_authenticated = false;
        self.storage.remove(USER_KEY);
    }

    /// Restore a previously persisted session. A corrupt record is logged
    /// and cleared rather than surfaced.
    pub fn init(&mut self) {
        let Some(raw) = self.storage.get(USER_KEY) else {
            return;
        };
        match serde_json::from_str::<User>(&raw) {
            Ok(user) => {
                self.user = Some(user);
                self.is_authenticated = true;
            }
            Err(e) => {
                log::error!("failed to restore session: {}", e);
                self.storage.remove(USER_KEY);
            }
        }
    }
}

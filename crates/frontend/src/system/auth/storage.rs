//! Persisted login session. The API client reads the token through
//! [`AuthStore`] rather than touching localStorage itself.

use std::sync::Arc;

use contracts::enums::Role;
use contracts::system::auth::SessionInfo;
use web_sys::window;

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const DIVISION_KEY: &str = "division";
const USERNAME_KEY: &str = "username";

/// Get/set/clear access to the login session
pub trait AuthStore: Send + Sync {
    fn token(&self) -> Option<String>;
    fn session(&self) -> Option<SessionInfo>;
    fn save(&self, token: &str, session: &SessionInfo);
    fn clear(&self);
}

/// Session kept in the browser's localStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageAuthStore;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn get_item(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

impl AuthStore for LocalStorageAuthStore {
    fn token(&self) -> Option<String> {
        get_item(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    fn session(&self) -> Option<SessionInfo> {
        self.token()?;
        Some(SessionInfo {
            username: get_item(USERNAME_KEY).unwrap_or_default(),
            role: Role::parse(&get_item(ROLE_KEY).unwrap_or_default()),
            division: get_item(DIVISION_KEY).unwrap_or_default(),
        })
    }

    fn save(&self, token: &str, session: &SessionInfo) {
        if let Some(storage) = get_local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(ROLE_KEY, session.role.code());
            let _ = storage.set_item(DIVISION_KEY, &session.division);
            let _ = storage.set_item(USERNAME_KEY, &session.username);
        }
    }

    fn clear(&self) {
        if let Some(storage) = get_local_storage() {
            for key in [TOKEN_KEY, ROLE_KEY, DIVISION_KEY, USERNAME_KEY] {
                let _ = storage.remove_item(key);
            }
        }
    }
}

/// Store used by the running application
pub fn local_store() -> Arc<dyn AuthStore> {
    Arc::new(LocalStorageAuthStore)
}

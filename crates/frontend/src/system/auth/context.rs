use contracts::enums::Role;
use contracts::system::auth::{LoginResponse, SessionInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub session: Option<SessionInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_admin())
    }

    /// Division forms are pinned to, for division-scoped users
    pub fn locked_division(&self) -> Option<String> {
        self.session.as_ref().and_then(|s| s.locked_division())
    }
}

fn restore() -> AuthState {
    let store = storage::local_store();
    AuthState {
        token: store.token(),
        session: store.session(),
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(restore());

    // Refresh role and division from the token claims
    Effect::new(move |_| {
        if auth_state.with_untracked(|s| s.token.is_none()) {
            return;
        }
        spawn_local(async move {
            match api::fetch_me().await {
                Ok(me) => auth_state.update(|s| {
                    if let Some(session) = s.session.as_mut() {
                        session.role = Role::parse(&me.role);
                        if !me.division.is_empty() {
                            session.division = me.division.clone();
                        }
                    }
                }),
                Err(e) => log::warn!("Could not refresh session: {}", e),
            }
        });
    });

    provide_context(auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    use_context::<RwSignal<AuthState>>().expect("AuthProvider not found in component tree")
}

/// Persist a successful login and publish it to the context
pub fn complete_login(auth_state: RwSignal<AuthState>, response: &LoginResponse) {
    let session = SessionInfo::from_login(response);
    storage::local_store().save(&response.token, &session);
    auth_state.set(AuthState {
        token: Some(response.token.clone()),
        session: Some(session),
    });
}

/// Forget the session
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::local_store().clear();
    auth_state.set(AuthState::default());
}

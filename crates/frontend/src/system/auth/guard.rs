use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use crate::shared::config::client_config;

/// Renders children only with a session, otherwise redirects to the login route
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();
    let login_route = client_config().auth.login_route.clone();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated())
            fallback=move || view! { <Redirect path=login_route.clone() /> }
        >
            {children()}
        </Show>
    }
}

/// Admin-only content. Other users are sent to the home route.
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();
    let home_route = client_config().auth.home_route.clone();

    view! {
        <Show
            when=move || auth_state.with(|s| s.is_authenticated() && s.is_admin())
            fallback=move || view! { <Redirect path=home_route.clone() /> }
        >
            {children()}
        </Show>
    }
}

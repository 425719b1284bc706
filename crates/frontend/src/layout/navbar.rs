use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::config::client_config;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth};

struct NavItem {
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    admin_only: bool,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/dashboard", icon: "dashboard", title: "Dashboard", admin_only: false },
    NavItem { href: "/projects", icon: "projects", title: "Projects", admin_only: false },
    NavItem { href: "/budgets", icon: "budgets", title: "Budgets", admin_only: false },
    NavItem { href: "/customers", icon: "customers", title: "Customers", admin_only: false },
    NavItem { href: "/users", icon: "users", title: "Users", admin_only: true },
];

#[component]
pub fn Navbar() -> impl IntoView {
    let auth_state = use_auth();
    let navigate = use_navigate();
    let login_route = client_config().auth.login_route.clone();

    let is_admin = move || auth_state.with(|s| s.is_admin());
    let username = move || {
        auth_state.with(|s| {
            s.session
                .as_ref()
                .map(|session| session.username.clone())
                .unwrap_or_default()
        })
    };
    let division = move || {
        auth_state.with(|s| {
            s.session
                .as_ref()
                .map(|session| session.division.clone())
                .filter(|d| !d.is_empty())
        })
    };

    let logout = move |_| {
        do_logout(auth_state);
        log::debug!("Logged out");
        navigate(&login_route, Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Sales Dashboard"</span>
            </div>

            <nav class="main-nav-bar">
                <ul>
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let admin_only = item.admin_only;
                            view! {
                                <Show when=move || !admin_only || is_admin()>
                                    <li>
                                        <A href=item.href attr:class="main-nav-bar__link">
                                            {icon(item.icon)}
                                            <span>{item.title}</span>
                                        </A>
                                    </li>
                                </Show>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span class="top-header__username">{username}</span>
                    {move || division().map(|d| view! { <span class="top-header__division">{d}</span> })}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Log out">
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}

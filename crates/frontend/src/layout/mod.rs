pub mod navbar;

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::system::auth::guard::RequireAuth;
use navbar::Navbar;

/// Authenticated application shell.
///
/// ```text
/// +------------------------------------------+
/// |                 Navbar                   |
/// +------------------------------------------+
/// |             routed page (Outlet)         |
/// +------------------------------------------+
/// ```
#[component]
pub fn AppLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <div class="app-layout">
                <Navbar />
                <main class="app-main">
                    <Outlet />
                </main>
            </div>
        </RequireAuth>
    }
}

use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::SalesDashboard;
use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_project::ui::details::ProjectDetails;
use crate::domain::a002_project::ui::list::ProjectList;
use crate::domain::a003_budget::ui::details::BudgetDetails;
use crate::domain::a003_budget::ui::list::BudgetList;
use crate::layout::AppLayout;
use crate::shared::config::client_config;
use crate::system::pages::login::LoginPage;
use crate::system::users::ui::list::UsersListPage;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"Page not found"</h1>
        </div>
    }
}

/// `/login` is public; everything else renders inside the authenticated layout
#[component]
pub fn AppRoutes() -> impl IntoView {
    let home_route = client_config().auth.home_route.clone();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/login") view=LoginPage />
                <ParentRoute path=path!("") view=AppLayout>
                    <Route
                        path=path!("")
                        view=move || view! { <Redirect path=home_route.clone() /> }
                    />
                    <Route path=path!("/dashboard") view=SalesDashboard />
                    <Route path=path!("/projects") view=ProjectList />
                    <Route path=path!("/projects/:id") view=ProjectDetails />
                    <Route path=path!("/budgets") view=BudgetList />
                    <Route path=path!("/budgets/:id") view=BudgetDetails />
                    <Route path=path!("/customers") view=CustomerList />
                    <Route path=path!("/users") view=UsersListPage />
                </ParentRoute>
            </Routes>
        </Router>
    }
}

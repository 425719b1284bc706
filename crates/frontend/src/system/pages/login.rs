use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;

use crate::shared::config::client_config;
use crate::system::auth::{api, context::complete_login, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let auth_state = use_auth();
    let navigate = use_navigate();
    let home_route = client_config().auth.home_route.clone();

    let on_submit = {
        let home_route = home_route.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();

            let username_val = username.get().trim().to_string();
            let password_val = password.get();
            if username_val.is_empty() || password_val.is_empty() {
                set_error_message.set(Some("Username and password are required.".to_string()));
                return;
            }

            set_is_loading.set(true);
            set_error_message.set(None);

            let navigate = navigate.clone();
            let home_route = home_route.clone();
            spawn_local(async move {
                match api::login(username_val, password_val).await {
                    Ok(response) => {
                        complete_login(auth_state, &response);
                        set_is_loading.set(false);
                        navigate(&home_route, Default::default());
                    }
                    Err(e) => {
                        log::warn!("Login failed: {}", e);
                        set_error_message.set(Some(e.to_string()));
                        set_is_loading.set(false);
                    }
                }
            });
        }
    };

    view! {
        <Show when=move || auth_state.with(|s| s.is_authenticated())>
            <Redirect path=home_route.clone() />
        </Show>
        <div class="login-container">
            <div class="login-box">
                <h1>"Sales System"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

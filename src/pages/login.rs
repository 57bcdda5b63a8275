//! Login page: email + password exchange for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "csr")]
use crate::net::api::{ApiClient, login_failed_message};
use crate::state::session::SessionContext;

/// Trim both fields and require them to be non-empty.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let session_notice = {
        let state = session.state();
        move || state.get().error.map(|e| e.to_string())
    };

    #[cfg(feature = "csr")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            error.set(String::new());
            session.dismiss_error();

            #[cfg(feature = "csr")]
            {
                let session = session.clone();
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    match api.login(&email_value, &password_value).await {
                        Ok(resp) => {
                            if session.login(&resp.token).await.is_ok() {
                                navigate(
                                    crate::util::route_guard::DASHBOARD_PATH,
                                    leptos_router::NavigateOptions::default(),
                                );
                            }
                        }
                        Err(e) => {
                            leptos::logging::warn!("login request failed: {e}");
                            error.set(login_failed_message(&e).to_owned());
                        }
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "csr"))]
            {
                let _ = (email_value, password_value);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Login"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                {move || session_notice().map(|msg| view! { <p class="auth-card__error">{msg}</p> })}
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

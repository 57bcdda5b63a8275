//! Registration page with client-side validation before the API call.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use std::sync::LazyLock;

use leptos::prelude::*;
use leptos_router::components::A;
use regex::Regex;

#[cfg(feature = "csr")]
use crate::net::api::{ApiClient, register_failed_message};

pub(crate) const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*@([A-Za-z0-9_-]+\.)+[a-zA-Z]{2,7}$").expect("email pattern compiles")
});

/// Validated registration fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_registration(username: &str, email: &str, password: &str) -> Result<Registration, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Username is required.");
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err("Please enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    Ok(Registration { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let api = expect_context::<ApiClient>();
    #[cfg(feature = "csr")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let form = match validate_registration(&username.get(), &email.get(), &password.get()) {
            Ok(form) => form,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match api.register(&form.username, &form.email, &form.password).await {
                    Ok(()) => {
                        leptos::logging::log!("registered account for {}", form.username);
                        navigate(crate::util::route_guard::LOGIN_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        error.set(Some(register_failed_message(&e)));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = form;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Register"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        required=true
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
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
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                {move || error.get().map(|msg| view! { <p class="auth-card__error">{msg}</p> })}
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

//! Full-screen placeholder shown while the session resolves.

use leptos::prelude::*;

#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <p>"Loading..."</p>
        </div>
    }
}

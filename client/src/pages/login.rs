//! Login placeholder. No form and no submission yet.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <section class="login-page">
            <div class="login-card">
                <h2>"Log in"</h2>
            </div>
        </section>
    }
}

//! Site header with branding and the login link.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::brand::BrandMark;
use crate::routes::AppRoute;

/// Header shown above every route. Must render inside the `<Router>`.
///
/// The link for the page currently shown carries `aria-current="page"`.
#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();
    let current = move |route: AppRoute| {
        (AppRoute::from_path(&location.pathname.get()) == Some(route)).then_some("page")
    };

    view! {
        <header class="site-header">
            <h1 class="site-header__brand">
                <a href=AppRoute::Home.path() aria-current=move || current(AppRoute::Home)>
                    <BrandMark/>
                </a>
            </h1>
            <div class="site-header__spacer"></div>
            <a class="button" href=AppRoute::Login.path() aria-current=move || current(AppRoute::Login)>
                "Log in"
            </a>
        </header>
    }
}

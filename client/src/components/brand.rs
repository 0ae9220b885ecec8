//! Two-tone "Trip Maker" wordmark used by the header and the home hero.

use leptos::prelude::*;

#[component]
pub fn BrandMark() -> impl IntoView {
    view! {
        <span class="brand__trip">"Trip"</span>
        " "
        <span class="brand__maker">"Maker"</span>
    }
}

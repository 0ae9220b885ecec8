//! Landing page: hero copy plus the trip settings form.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::brand::BrandMark;
use crate::components::settings_form::TripSettingsForm;

pub const TAGLINE: &str = "Create lists of potential day trips with ease.";
pub const DESCRIPTION: &str = "Start from where you are, choose how far you are willing to travel, \
     and keep a shortlist of nearby places worth a day out.";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <HomeHero/>
        <section class="planner">
            <TripSettingsForm/>
        </section>
    }
}

/// Heading, tagline, and description at the top of the landing page.
#[component]
pub fn HomeHero() -> impl IntoView {
    view! {
        <section class="hero">
            <h1 class="hero__title">
                <BrandMark/>
            </h1>
            <p class="hero__tagline">{TAGLINE}</p>
            <p class="hero__description">{DESCRIPTION}</p>
        </section>
    }
}

//! Hero section.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class=css::hero>
            <span class=css::heroBadge>
                <Icon icon=ic::SPARKLES />
                "Navbar templates, ready to ship"
            </span>
            <h1 class=css::heroTitle>
                "Build your navbar with " <span class=css::heroAccent>{APP_NAME}</span>
            </h1>
            <p class=css::heroTagline>{APP_TAGLINE}</p>
            <div class=css::heroActions>
                <button class=css::heroPrimary on:click=move |_| Route::Playground.push()>
                    "Try for free"
                </button>
                <button class=css::heroSecondary on:click=move |_| Route::Template.push()>
                    "Browse Templates"
                </button>
            </div>
        </section>
    }
}

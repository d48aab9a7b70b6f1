//! About statement section.

use leptos::prelude::*;

use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class=css::about>
            <p class=css::aboutLabel>"The " {APP_NAME}</p>
            <p class=css::aboutStatement>
                "We believe that the navbar is not just a UI component, but rather \
                 the foundation of an effective and intuitive user experience."
                <button class=css::aboutPill>"learn more"</button>
            </p>
        </section>
    }
}

//! Animated scroll hint shown while the page is at the top.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

#[component]
pub fn ScrollCue() -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();

    view! {
        <Show when=move || scroll_y.get() < 40.0>
            <div class=css::scrollCue aria-hidden="true">
                <Icon icon=ic::CHEVRON_DOWN />
            </div>
        </Show>
    }
}

//! Fixed site navigation bar.
//!
//! Stays mounted across route changes. Past a small scroll offset the bar
//! tightens its padding and gains a shadow; on narrow viewports the links
//! move into a toggleable overlay menu.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{use_media_query, use_window_scroll};

use super::notifications::Notifications;
use super::search::SearchBar;
use crate::components::icons as ic;
use crate::config::{APP_NAME, SCROLL_THRESHOLD_PX};
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn SiteNavbar(#[prop(into)] current_route: Signal<Route>) -> impl IntoView {
    let (_scroll_x, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLL_THRESHOLD_PX);

    let is_narrow = use_media_query("(max-width: 768px)");
    let menu_open = RwSignal::new(false);

    // Leaving the narrow breakpoint discards the overlay menu.
    Effect::new(move |_| {
        if !is_narrow.get() {
            menu_open.set(false);
        }
    });

    let links = move || {
        Route::ALL
            .iter()
            .map(|route| {
                let route = *route;
                let class = move || {
                    if current_route.get() == route {
                        format!("{} {}", css::link, css::linkActive)
                    } else {
                        css::link.to_string()
                    }
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| {
                            route.push();
                            menu_open.set(false);
                        }
                    >
                        {route.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let bar_class = move || {
        if scrolled.get() {
            format!("{} {}", css::navbar, css::navbarScrolled)
        } else {
            css::navbar.to_string()
        }
    };

    view! {
        <header class=bar_class>
            <div class=css::inner>
                <button class=css::brand on:click=move |_| Route::Home.push()>
                    "🔥 " {APP_NAME}
                </button>
                <Show when=move || !is_narrow.get()>
                    <nav class=css::links>{links()}</nav>
                </Show>
                <div class=css::actions>
                    <SearchBar />
                    <Notifications />
                    <Show when=move || is_narrow.get()>
                        <button
                            class=css::iconButton
                            aria-label="Toggle menu"
                            on:click=move |_| menu_open.update(|o| *o = !*o)
                        >
                            {move || if menu_open.get() {
                                view! { <Icon icon=ic::CLOSE /> }.into_any()
                            } else {
                                view! { <Icon icon=ic::MENU /> }.into_any()
                            }}
                        </button>
                    </Show>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <nav class=css::mobileMenu>{links()}</nav>
            </Show>
        </header>
    }
}

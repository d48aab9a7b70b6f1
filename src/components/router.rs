//! Application router component.
//!
//! Hash-based routing using native hashchange events, so browser
//! back/forward buttons work without a router dependency. The site navbar
//! stays mounted across route changes; only the page content swaps.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::footer::Footer;
use crate::components::home::{About, Hero, NavbarDemo, ScrollCue, Showcase, Stats, Testimonials};
use crate::components::navbar::SiteNavbar;
use crate::components::playground::Playground;
use crate::components::stack::{StackPlayground, TemplateHero};
use crate::models::Route;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(Route::current());

    // Keep the route signal in sync with the URL hash (runs once on mount).
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app.
        closure.forget();
    }

    view! {
        <SiteNavbar current_route=Signal::derive(move || route.get()) />

        {move || match route.get() {
            Route::Home => view! { <HomePage /> }.into_any(),
            Route::Template => view! { <TemplatePage /> }.into_any(),
            Route::Playground => view! { <PlaygroundPage /> }.into_any(),
        }}
    }
}

/// Landing page: hero, video showcase, about, stats strip, testimonial
/// carousel, navbar demo.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <Showcase />
        <About />
        <Stats />
        <Testimonials />
        <NavbarDemo />
        <Footer />
        <ScrollCue />
    }
}

/// Ready-to-use navbar page: template hero + stack playground.
#[component]
fn TemplatePage() -> impl IntoView {
    view! {
        <TemplateHero />
        <StackPlayground />
        <Footer />
    }
}

/// Customizer playground page.
#[component]
fn PlaygroundPage() -> impl IntoView {
    view! {
        <Playground />
        <Footer />
    }
}

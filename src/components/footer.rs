//! Site footer.

use leptos::prelude::*;

use crate::config::APP_NAME;
use crate::models::Route;

stylance::import_crate_style!(css, "src/components/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let go = move |route: Route| move |_| route.push();

    view! {
        <footer class=css::footer>
            <div class=css::inner>
                <div class=css::brandColumn>
                    <span class=css::brand>"🔥 " {APP_NAME}</span>
                    <p class=css::blurb>
                        "Ready-to-use navbar templates for every framework."
                    </p>
                </div>
                <div class=css::linkColumn>
                    <span class=css::heading>"Product"</span>
                    <button class=css::link on:click=go(Route::Template)>"Templates"</button>
                    <button class=css::link on:click=go(Route::Playground)>"Playground"</button>
                </div>
                <div class=css::linkColumn>
                    <span class=css::heading>"Company"</span>
                    <button class=css::link on:click=go(Route::Home)>"About"</button>
                    <a class=css::link href="https://github.com" target="_blank" rel="noreferrer">
                        "GitHub"
                    </a>
                </div>
            </div>
            <div class=css::legal>
                <span>"© 2025 " {APP_NAME} ". All rights reserved."</span>
            </div>
        </footer>
    }
}

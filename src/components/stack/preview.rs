//! Fixed-style preview for the stack playground.
//!
//! Renders the same navbar every generated snippet describes, including a
//! working mobile menu toggle, so the preview is a faithful demo rather
//! than a mockup.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::STACK_MENU;

stylance::import_crate_style!(css, "src/components/stack/stack.module.css");

#[component]
pub fn StackPreview() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let links = move || {
        STACK_MENU
            .into_iter()
            .map(|item| view! { <a class=css::previewLink href="#">{item}</a> })
            .collect_view()
    };

    view! {
        <div class=css::previewStage>
            <nav class=css::previewNav>
                <span class=css::previewBrand>"YourLogo"</span>
                <div class=css::previewLinks>
                    {links()}
                    <button class=css::previewSignup>"Sign Up"</button>
                </div>
                <button
                    class=css::previewToggle
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </nav>
            <Show when=move || menu_open.get()>
                <div class=css::previewMenu>
                    {links()}
                    <button class=css::previewSignup>"Sign Up"</button>
                </div>
            </Show>
        </div>
    }
}

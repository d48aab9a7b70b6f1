//! Customizer playground page.
//!
//! One [`Selection`] signal is the single source of truth: the controls
//! write it, the preview and code panel both derive from it, so they can
//! never disagree.

use leptos::prelude::*;

use navstack_core::playground::Selection;

use super::code_panel::CodePanel;
use super::controls::Controls;
use super::preview::Preview;

stylance::import_crate_style!(css, "src/components/playground/playground.module.css");

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Preview,
    Code,
}

#[component]
pub fn Playground() -> impl IntoView {
    let selection = RwSignal::new(Selection::default());
    let tab = RwSignal::new(Tab::Preview);

    let tab_class = move |this: Tab| {
        move || {
            if tab.get() == this {
                format!("{} {}", css::tab, css::tabActive)
            } else {
                css::tab.to_string()
            }
        }
    };

    view! {
        <section class=css::page>
            <header class=css::header>
                <h1 class=css::title>"Navbar Playground"</h1>
                <p class=css::subtitle>
                    "Pick a style, watch the preview, export the code."
                </p>
            </header>
            <div class=css::workspace>
                <Controls selection=selection />
                <div class=css::stage>
                    <div class=css::tabs>
                        <button class=tab_class(Tab::Preview) on:click=move |_| tab.set(Tab::Preview)>
                            "Preview"
                        </button>
                        <button class=tab_class(Tab::Code) on:click=move |_| tab.set(Tab::Code)>
                            "Code"
                        </button>
                    </div>
                    {move || match tab.get() {
                        Tab::Preview => view! { <Preview selection=selection /> }.into_any(),
                        Tab::Code => view! { <CodePanel selection=selection /> }.into_any(),
                    }}
                </div>
            </div>
        </section>
    }
}

//! Stack playground page.
//!
//! Unlike the customizer this instance has a single axis: the target
//! framework. The preview's look is fixed; only the generated snippet
//! changes with the selection.

use leptos::prelude::*;

use navstack_core::stack::{self, StackFramework};

use super::preview::StackPreview;
use crate::components::export::ExportControls;
use crate::config::STACK_MENU;

stylance::import_crate_style!(css, "src/components/stack/stack.module.css");

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Preview,
    Code,
}

#[component]
pub fn StackPlayground() -> impl IntoView {
    let framework = RwSignal::new(StackFramework::default());
    let tab = RwSignal::new(Tab::Preview);

    let artifact = Memo::new(move |_| stack::export_artifact(framework.get(), &STACK_MENU));

    let on_framework_change = move |ev| {
        if let Ok(parsed) = event_target_value(&ev).parse::<StackFramework>() {
            framework.set(parsed);
        }
    };

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
                <h1 class=css::title>"Ready-to-Use Navbar"</h1>
                <p class=css::subtitle>
                    "One polished navbar, generated for the stack you ship with."
                </p>
            </header>
            <div class=css::toolbar>
                <div class=css::tabs>
                    <button class=tab_class(Tab::Preview) on:click=move |_| tab.set(Tab::Preview)>
                        "Preview"
                    </button>
                    <button class=tab_class(Tab::Code) on:click=move |_| tab.set(Tab::Code)>
                        "Code"
                    </button>
                </div>
                <select
                    class=css::select
                    on:change=on_framework_change
                    prop:value=move || framework.get().as_str()
                >
                    {StackFramework::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || match tab.get() {
                Tab::Preview => view! { <StackPreview /> }.into_any(),
                Tab::Code => view! {
                    <div class=css::codePanel>
                        <ExportControls artifact=artifact />
                        <pre class=css::codeBlock>
                            <code>{move || artifact.get().content}</code>
                        </pre>
                    </div>
                }.into_any(),
            }}
        </section>
    }
}

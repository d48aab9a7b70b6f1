//! Navbar demo section: one fixed navbar shown as UI and as code.
//!
//! Wide viewports show the preview card and the code card side by side;
//! narrow viewports collapse to a tab switch. The copy button shares the
//! acknowledgement behavior of the playground export controls: a 2000 ms
//! cooldown that restarts on repeat copies.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::components::icons as ic;
use crate::config::COPY_ACK_MS;
use crate::utils::{dom, Cooldown};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

const DEMO_LINKS: [&str; 4] = ["Home", "About", "Services", "Help"];

const DEMO_SNIPPET: &str = r##"<div className="flex items-center justify-between px-8 py-5 bg-white shadow-md">
  <div className="flex gap-10 text-gray-800 text-lg font-medium">
    <button className="hover:text-gray-600 transition">Home</button>
    <button className="hover:text-gray-600 transition">About</button>
    <button className="hover:text-gray-600 transition">Services</button>
    <button className="hover:text-gray-600 transition">Help</button>
  </div>
  <div className="text-gray-800">
    <HomeIcon size={22} />
  </div>
</div>"##;

#[derive(Clone, Copy, PartialEq, Eq)]
enum DemoTab {
    Ui,
    Code,
}

#[component]
pub fn NavbarDemo() -> impl IntoView {
    let is_narrow = use_media_query("(max-width: 768px)");
    let tab = RwSignal::new(DemoTab::Ui);

    let ack = Cooldown::new(COPY_ACK_MS);
    on_cleanup(move || ack.cancel());
    let copied = ack.active();

    let on_copy = move |_| {
        dom::copy_to_clipboard(DEMO_SNIPPET);
        ack.trigger();
    };

    let tab_class = move |this: DemoTab| {
        move || {
            if tab.get() == this {
                format!("{} {}", css::demoTab, css::demoTabActive)
            } else {
                css::demoTab.to_string()
            }
        }
    };

    let ui_card = move || {
        view! {
            <div class=css::demoCard>
                <div class=css::demoCardHeader>
                    <span>"Navbar Preview"</span>
                </div>
                <div class=css::demoCardBody>
                    <div class=css::demoNavbar>
                        <div class=css::demoNavbarLinks>
                            {DEMO_LINKS
                                .into_iter()
                                .map(|item| view! { <button class=css::demoNavbarLink>{item}</button> })
                                .collect_view()}
                        </div>
                        <Icon icon=ic::LAYERS />
                    </div>
                </div>
            </div>
        }
    };

    let code_card = move || {
        view! {
            <div class=css::demoCard>
                <div class=css::demoCardHeader>
                    <span class=css::demoCardHeaderLabel>
                        <Icon icon=ic::CODE />
                        "Preview Code"
                    </span>
                    <button class=css::demoCopyButton aria-label="Copy code" on:click=on_copy>
                        {move || if copied.get() {
                            view! { <Icon icon=ic::CHECK /> }.into_any()
                        } else {
                            view! { <Icon icon=ic::COPY /> }.into_any()
                        }}
                        <span>{move || if copied.get() { "Copied!" } else { "Copy" }}</span>
                    </button>
                </div>
                <pre class=css::demoCode>
                    <code>{DEMO_SNIPPET}</code>
                </pre>
            </div>
        }
    };

    view! {
        <section class=css::demo>
            <h2 class=css::sectionTitle>"One navbar, two views"</h2>
            <Show when=move || is_narrow.get()>
                <div class=css::demoTabs role="tablist">
                    <button
                        role="tab"
                        class=tab_class(DemoTab::Ui)
                        on:click=move |_| tab.set(DemoTab::Ui)
                    >
                        "Preview UI"
                    </button>
                    <button
                        role="tab"
                        class=tab_class(DemoTab::Code)
                        on:click=move |_| tab.set(DemoTab::Code)
                    >
                        "Code"
                    </button>
                </div>
            </Show>
            <div class=css::demoCards>
                {move || if is_narrow.get() {
                    match tab.get() {
                        DemoTab::Ui => ui_card().into_any(),
                        DemoTab::Code => code_card().into_any(),
                    }
                } else {
                    view! {
                        {ui_card()}
                        {code_card()}
                    }.into_any()
                }}
            </div>
            <Show when=move || copied.get()>
                <div class=css::demoToast>
                    <Icon icon=ic::CHECK />
                    "Code copied!"
                </div>
            </Show>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_snippet_is_trim_normalized() {
        assert_eq!(DEMO_SNIPPET, DEMO_SNIPPET.trim());
    }

    #[test]
    fn demo_snippet_lists_links_in_order() {
        let mut last = 0;
        for link in DEMO_LINKS {
            let needle = format!(">{link}<");
            let at = DEMO_SNIPPET[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("{link} missing or out of order"));
            last += at + needle.len();
        }
    }
}

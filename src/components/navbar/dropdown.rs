//! Generic dropdown/overlay primitive.
//!
//! Renders a trigger (the children) plus an absolutely-positioned panel.
//! The panel closes on outside click or Escape; open/close state is owned
//! by the caller so sibling dropdowns can coordinate (only one open).

use leptos::prelude::*;
use leptos_use::{on_click_outside, use_document, use_event_listener};

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn Dropdown(
    /// Whether the panel is visible.
    #[prop(into)]
    open: Signal<bool>,
    /// Invoked when an outside click or Escape should close the panel.
    #[prop(into)]
    on_close: Callback<()>,
    /// Panel contents.
    #[prop(into)]
    panel: ViewFn,
    /// Align the panel to the right edge of the trigger.
    #[prop(optional)]
    align_right: bool,
    children: Children,
) -> impl IntoView {
    let root = NodeRef::<leptos::html::Div>::new();

    let _ = on_click_outside(root, move |_| {
        if open.get_untracked() {
            on_close.run(());
        }
    });

    let _ = use_event_listener(
        use_document(),
        leptos::ev::keydown,
        move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" && open.get_untracked() {
                on_close.run(());
            }
        },
    );

    let panel_class = move || {
        if align_right {
            format!("{} {}", css::dropdownPanel, css::dropdownPanelRight)
        } else {
            css::dropdownPanel.to_string()
        }
    };

    view! {
        <div node_ref=root class=css::dropdown>
            {children()}
            <Show when=move || open.get()>
                <div class=panel_class role="menu">
                    {panel.run()}
                </div>
            </Show>
        </div>
    }
}

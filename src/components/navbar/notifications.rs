//! Notification bell with a dropdown panel.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::dropdown::Dropdown;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

const NOTIFICATIONS: &[&str] = &[
    "New template added: Glass navbar",
    "Your export is ready to download",
    "Playground now supports Bootstrap",
];

#[component]
pub fn Notifications() -> impl IntoView {
    let open = RwSignal::new(false);

    let panel = move || {
        NOTIFICATIONS
            .iter()
            .map(|note| view! { <div class=css::notification>{*note}</div> })
            .collect_view()
    };

    view! {
        <Dropdown
            open=Signal::derive(move || open.get())
            on_close=move |_| open.set(false)
            panel=panel
            align_right=true
        >
            <button
                class=css::iconButton
                aria-label="Notifications"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <Icon icon=ic::BELL />
                <span class=css::badge>{NOTIFICATIONS.len()}</span>
            </button>
        </Dropdown>
    }
}

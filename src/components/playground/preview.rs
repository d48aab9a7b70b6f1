//! Live navbar preview for the customizer playground.
//!
//! Mirrors what the generated snippet would render: variant and theme set
//! the chrome, layout sets the container width, device narrows the stage.
//! On the mobile device the links collapse behind a toggle that starts
//! closed; leaving the mobile device discards the open state.

use leptos::prelude::*;
use leptos_icons::Icon;

use navstack_core::playground::{Device, Layout, Selection, Theme, Variant};

use crate::components::icons as ic;
use crate::config::{APP_NAME, PLAYGROUND_MENU};

stylance::import_crate_style!(css, "src/components/playground/playground.module.css");

#[component]
pub fn Preview(#[prop(into)] selection: Signal<Selection>) -> impl IntoView {
    let active_item = RwSignal::new(PLAYGROUND_MENU[0]);
    let menu_open = RwSignal::new(false);

    Effect::new(move |_| {
        if selection.get().device != Device::Mobile {
            menu_open.set(false);
        }
    });

    let stage_class = move || {
        let s = selection.get();
        let theme = match s.theme {
            Theme::Light => css::stageLight,
            Theme::Dark => css::stageDark,
        };
        let device = match s.device {
            Device::Mobile => css::deviceMobile,
            Device::Tablet => css::deviceTablet,
            Device::Desktop => css::deviceDesktop,
        };
        format!("{} {} {}", css::previewStage, theme, device)
    };

    let nav_class = move || {
        let s = selection.get();
        let chrome = match (s.variant, s.theme) {
            (Variant::Glass, Theme::Light) => css::glassLight,
            (Variant::Glass, Theme::Dark) => css::glassDark,
            (Variant::Minimal, Theme::Light) => css::minimalLight,
            (Variant::Minimal, Theme::Dark) => css::minimalDark,
            (Variant::Gradient, _) => css::gradient,
        };
        let layout = match s.layout {
            Layout::Full => css::layoutFull,
            Layout::Boxed => css::layoutBoxed,
            Layout::Centered => css::layoutCentered,
        };
        format!("{} {} {}", css::previewNav, chrome, layout)
    };

    let links = move || {
        PLAYGROUND_MENU
            .into_iter()
            .map(|item| {
                let class = move || {
                    if active_item.get() == item {
                        format!("{} {}", css::previewLink, css::previewLinkActive)
                    } else {
                        css::previewLink.to_string()
                    }
                };
                view! {
                    <button class=class on:click=move |_| active_item.set(item)>
                        {item}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class=stage_class>
            <nav class=nav_class>
                <span class=css::previewBrand>"🔥 " {APP_NAME}</span>
                <Show when=move || selection.get().device != Device::Mobile>
                    <div class=css::previewLinks>
                        {links()}
                        <button class=css::previewSignup>"Sign Up"</button>
                    </div>
                </Show>
                <Show when=move || selection.get().device == Device::Mobile>
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
                </Show>
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

//! Option controls for the customizer playground.
//!
//! Buttons write one axis each; reset restores every axis in a single
//! update so observers never see a half-reset selection. The framework
//! `<select>` round-trips through `FromStr`; a value outside the domain
//! leaves the selection untouched.

use leptos::prelude::*;
use leptos_icons::Icon;

use navstack_core::playground::{Device, Framework, Layout, Selection, Theme, Variant};

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/playground/playground.module.css");

fn option_class(active: bool) -> String {
    if active {
        format!("{} {}", css::option, css::optionActive)
    } else {
        css::option.to_string()
    }
}

#[component]
pub fn Controls(selection: RwSignal<Selection>) -> impl IntoView {
    let theme_buttons = move || {
        Theme::ALL
            .into_iter()
            .map(|theme| {
                let icon = match theme {
                    Theme::Light => ic::SUN,
                    Theme::Dark => ic::MOON,
                };
                view! {
                    <button
                        class=move || option_class(selection.get().theme == theme)
                        on:click=move |_| selection.update(|s| s.theme = theme)
                    >
                        <Icon icon=icon />
                        {theme.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let variant_buttons = move || {
        Variant::ALL
            .into_iter()
            .map(|variant| {
                view! {
                    <button
                        class=move || option_class(selection.get().variant == variant)
                        on:click=move |_| selection.update(|s| s.variant = variant)
                    >
                        {variant.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let layout_buttons = move || {
        Layout::ALL
            .into_iter()
            .map(|layout| {
                view! {
                    <button
                        class=move || option_class(selection.get().layout == layout)
                        on:click=move |_| selection.update(|s| s.layout = layout)
                    >
                        {layout.label()}
                    </button>
                }
            })
            .collect_view()
    };

    let device_buttons = move || {
        Device::ALL
            .into_iter()
            .map(|device| {
                let icon = match device {
                    Device::Mobile => ic::SMARTPHONE,
                    Device::Tablet => ic::TABLET,
                    Device::Desktop => ic::MONITOR,
                };
                view! {
                    <button
                        class=move || option_class(selection.get().device == device)
                        aria-label=device.as_str()
                        on:click=move |_| selection.update(|s| s.device = device)
                    >
                        <Icon icon=icon />
                    </button>
                }
            })
            .collect_view()
    };

    let on_framework_change = move |ev| {
        if let Ok(framework) = event_target_value(&ev).parse::<Framework>() {
            selection.update(|s| s.framework = framework);
        }
    };

    view! {
        <aside class=css::controls>
            <div class=css::group>
                <span class=css::groupLabel>
                    <Icon icon=ic::PALETTE />
                    "Theme"
                </span>
                <div class=css::groupOptions>{theme_buttons()}</div>
            </div>
            <div class=css::group>
                <span class=css::groupLabel>
                    <Icon icon=ic::SPARKLES />
                    "Variant"
                </span>
                <div class=css::groupOptions>{variant_buttons()}</div>
            </div>
            <div class=css::group>
                <span class=css::groupLabel>
                    <Icon icon=ic::LAYERS />
                    "Layout"
                </span>
                <div class=css::groupOptions>{layout_buttons()}</div>
            </div>
            <div class=css::group>
                <span class=css::groupLabel>
                    <Icon icon=ic::LAPTOP />
                    "Device"
                </span>
                <div class=css::groupOptions>{device_buttons()}</div>
            </div>
            <div class=css::group>
                <span class=css::groupLabel>
                    <Icon icon=ic::CODE />
                    "Framework"
                </span>
                <select
                    class=css::select
                    on:change=on_framework_change
                    prop:value=move || selection.get().framework.as_str()
                >
                    {Framework::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            <button class=css::resetButton on:click=move |_| selection.update(|s| s.reset())>
                <Icon icon=ic::RESET />
                "Reset"
            </button>
        </aside>
    }
}

//! Template search with debounced suggestions and filter dropdowns.
//!
//! Keystrokes only schedule suggestion work; the lookup runs after the
//! input has been quiet for [`SEARCH_DEBOUNCE_MS`], so older lookups never
//! land after newer ones. Clearing the input cancels any pending lookup.

use leptos::logging;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::dropdown::Dropdown;
use super::suggestions::SuggestionList;
use crate::components::icons as ic;
use crate::config::{FRAMEWORK_FILTERS, SEARCH_DEBOUNCE_MS, STYLE_FILTERS};
use crate::utils::Debounce;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

/// Which filter dropdown is open. At most one at a time.
#[derive(Clone, Copy, PartialEq, Eq)]
enum FilterMenu {
    Framework,
    Style,
}

/// Suggestions for a (trimmed, non-empty) keyword.
fn suggestions_for(keyword: &str) -> Vec<String> {
    let keyword = keyword.trim();
    ["component", "tutorial", "docs"]
        .into_iter()
        .map(|kind| format!("{keyword} {kind}"))
        .collect()
}

#[component]
pub fn SearchBar() -> impl IntoView {
    let keyword = RwSignal::new(String::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let loading = RwSignal::new(false);
    let highlighted = RwSignal::new(None::<usize>);
    let framework = RwSignal::new(None::<&'static str>);
    let style = RwSignal::new(None::<&'static str>);
    let open_menu = RwSignal::new(None::<FilterMenu>);

    let debounce = Debounce::new(SEARCH_DEBOUNCE_MS);
    on_cleanup(move || debounce.cancel());

    let clear_results = move || {
        debounce.cancel();
        suggestions.set(Vec::new());
        loading.set(false);
        highlighted.set(None);
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        keyword.set(value.clone());
        highlighted.set(None);

        if value.trim().is_empty() {
            clear_results();
            return;
        }

        loading.set(true);
        debounce.schedule(move || {
            let _ = suggestions.try_set(suggestions_for(&value));
            let _ = loading.try_set(false);
        });
    };

    let submit = move |term: String| {
        let term = term.trim().to_string();
        if term.is_empty() {
            return;
        }
        logging::log!(
            "search: {term:?} framework={:?} style={:?}",
            framework.get_untracked(),
            style.get_untracked()
        );
        keyword.set(term);
        clear_results();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let count = suggestions.with_untracked(|s| s.len());
        match ev.key().as_str() {
            "ArrowDown" if count > 0 => {
                ev.prevent_default();
                highlighted.update(|h| *h = Some(h.map_or(0, |i| (i + 1) % count)));
            }
            "ArrowUp" if count > 0 => {
                ev.prevent_default();
                highlighted.update(|h| *h = Some(h.map_or(count - 1, |i| (i + count - 1) % count)));
            }
            "Enter" => {
                let term = highlighted
                    .get_untracked()
                    .and_then(|i| suggestions.with_untracked(|s| s.get(i).cloned()))
                    .unwrap_or_else(|| keyword.get_untracked());
                submit(term);
            }
            "Escape" => clear_results(),
            _ => {}
        }
    };

    view! {
        <div class=css::search>
            <div class=css::searchBox>
                <Icon icon=ic::SEARCH />
                <input
                    class=css::searchInput
                    type="text"
                    placeholder="Search templates..."
                    prop:value=move || keyword.get()
                    on:input=on_input
                    on:keydown=on_keydown
                />
                <Show when=move || loading.get()>
                    <span class=css::searchSpinner aria-label="loading"></span>
                </Show>
            </div>
            <SuggestionList
                items=Signal::derive(move || suggestions.get())
                highlighted=Signal::derive(move || highlighted.get())
                on_select=move |term| submit(term)
            />
            <div class=css::filters>
                <FilterDropdown
                    label="Framework"
                    options=FRAMEWORK_FILTERS
                    selected=framework
                    open=Signal::derive(move || open_menu.get() == Some(FilterMenu::Framework))
                    on_toggle=move |_| {
                        open_menu.update(|m| {
                            *m = if *m == Some(FilterMenu::Framework) {
                                None
                            } else {
                                Some(FilterMenu::Framework)
                            };
                        });
                    }
                    on_close=move |_| open_menu.set(None)
                />
                <FilterDropdown
                    label="Style"
                    options=STYLE_FILTERS
                    selected=style
                    open=Signal::derive(move || open_menu.get() == Some(FilterMenu::Style))
                    on_toggle=move |_| {
                        open_menu.update(|m| {
                            *m = if *m == Some(FilterMenu::Style) {
                                None
                            } else {
                                Some(FilterMenu::Style)
                            };
                        });
                    }
                    on_close=move |_| open_menu.set(None)
                />
            </div>
        </div>
    }
}

/// Single-select filter. Clicking the selected option deselects it.
#[component]
fn FilterDropdown(
    label: &'static str,
    options: &'static [&'static str],
    selected: RwSignal<Option<&'static str>>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let panel = move || {
        options
            .iter()
            .map(|option| {
                let option = *option;
                let class = move || {
                    if selected.get() == Some(option) {
                        format!("{} {}", css::filterOption, css::filterOptionActive)
                    } else {
                        css::filterOption.to_string()
                    }
                };
                view! {
                    <button
                        class=class
                        on:click=move |_| {
                            selected.update(|s| {
                                *s = if *s == Some(option) { None } else { Some(option) };
                            });
                            on_close.run(());
                        }
                    >
                        {option}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <Dropdown open=open on_close=on_close panel=panel>
            <button class=css::filterButton on:click=move |_| on_toggle.run(())>
                <span>{move || selected.get().unwrap_or(label)}</span>
                <Icon icon=ic::CHEVRON_DOWN />
            </button>
        </Dropdown>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suggestions_follow_keyword() {
        assert_eq!(
            suggestions_for("navbar"),
            vec!["navbar component", "navbar tutorial", "navbar docs"]
        );
    }

    #[test]
    fn suggestions_trim_the_keyword() {
        assert_eq!(suggestions_for("  glass  ")[0], "glass component");
    }
}

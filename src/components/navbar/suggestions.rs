//! Suggestion list rendered beneath the search input.

use leptos::prelude::*;

stylance::import_crate_style!(css, "src/components/navbar/navbar.module.css");

#[component]
pub fn SuggestionList(
    #[prop(into)] items: Signal<Vec<String>>,
    /// Index of the keyboard-highlighted entry, if any.
    #[prop(into)] highlighted: Signal<Option<usize>>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <Show when=move || !items.get().is_empty()>
            <ul class=css::suggestionList role="listbox">
                <For
                    each={move || items.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(index, item)| (*index, item.clone())
                    children=move |(index, item)| {
                        let label = item.clone();
                        let class = move || {
                            if highlighted.get() == Some(index) {
                                format!("{} {}", css::suggestion, css::suggestionActive)
                            } else {
                                css::suggestion.to_string()
                            }
                        };
                        // mousedown so selection wins over the input losing focus
                        view! {
                            <li
                                class=class
                                role="option"
                                on:mousedown=move |_| on_select.run(item.clone())
                            >
                                {label}
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

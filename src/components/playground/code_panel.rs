//! Generated-code panel for the customizer playground.

use leptos::prelude::*;

use navstack_core::playground;

use crate::components::export::ExportControls;
use crate::config::PLAYGROUND_MENU;

stylance::import_crate_style!(css, "src/components/playground/playground.module.css");

#[component]
pub fn CodePanel(
    #[prop(into)] selection: Signal<playground::Selection>,
) -> impl IntoView {
    // Device and layout do not affect generated code, so changing them
    // must not re-render the snippet.
    let artifact = Memo::new(move |_| {
        let s = selection.get();
        playground::export_artifact(s.framework, s.variant, s.theme, &PLAYGROUND_MENU)
    });

    view! {
        <div class=css::codePanel>
            <ExportControls artifact=artifact />
            <pre class=css::codeBlock>
                <code>{move || artifact.get().content}</code>
            </pre>
        </div>
    }
}

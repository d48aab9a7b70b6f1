//! Copy/download controls shared by both playgrounds.
//!
//! Owns the "Copied!" acknowledgement cooldown; rapid repeated copies
//! restart the 2000 ms countdown (last call wins). Both actions are
//! best-effort: an unavailable clipboard or a cancelled save dialog is not
//! observable here and produces no error state.

use leptos::logging;
use leptos::prelude::*;
use leptos_icons::Icon;

use navstack_core::ExportArtifact;

use crate::components::icons as ic;
use crate::config::COPY_ACK_MS;
use crate::utils::{dom, Cooldown};

stylance::import_crate_style!(css, "src/components/export.module.css");

/// Copy-to-clipboard and file-download buttons for the current snippet.
#[component]
pub fn ExportControls(#[prop(into)] artifact: Signal<ExportArtifact>) -> impl IntoView {
    let ack = Cooldown::new(COPY_ACK_MS);
    on_cleanup(move || ack.cancel());

    let copied = ack.active();

    let on_copy = move |_| {
        let artifact = artifact.get_untracked();
        dom::copy_to_clipboard(&artifact.content);
        ack.trigger();
    };

    let on_download = move |_| {
        let artifact = artifact.get_untracked();
        logging::log!("exporting {}", artifact.filename);
        dom::download_artifact(&artifact);
    };

    view! {
        <div class=css::actions>
            <button class=css::copyButton on:click=on_copy>
                {move || if copied.get() {
                    view! { <Icon icon=ic::CHECK /> }.into_any()
                } else {
                    view! { <Icon icon=ic::COPY /> }.into_any()
                }}
                <span>{move || if copied.get() { "Copied!" } else { "Copy" }}</span>
            </button>
            <button class=css::exportButton on:click=on_download>
                <Icon icon=ic::DOWNLOAD />
                <span>"Export"</span>
            </button>
        </div>
    }
}

//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs. Clipboard and download
//! are best-effort: if the environment lacks the API or the user cancels,
//! the operation silently does not complete (no retries, no error state).

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url, Window};

use navstack_core::ExportArtifact;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Write text to the system clipboard (async, fire-and-forget).
pub fn copy_to_clipboard(text: &str) {
    let Some(window) = window() else { return };
    let promise = window.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
    });
}

/// Offer an export artifact through the browser's save-file flow.
///
/// Creates an object URL for a blob of the artifact's content, clicks a
/// synthetic anchor, and revokes the URL again. The blob lives only for the
/// duration of this call.
pub fn download_artifact(artifact: &ExportArtifact) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&JsValue::from_str(&artifact.content));
    let options = BlobPropertyBag::new();
    options.set_type(artifact.mime);

    let Ok(blob) = Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(element) = document.create_element("a")
        && let Ok(anchor) = element.dyn_into::<HtmlAnchorElement>()
    {
        anchor.set_href(&url);
        anchor.set_download(&artifact.filename);
        anchor.click();
    }

    let _ = Url::revoke_object_url(&url);
}

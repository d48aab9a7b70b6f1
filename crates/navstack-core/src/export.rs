//! Export artifact model.
//!
//! An artifact is the ephemeral byte payload handed to the browser's save
//! flow: snippet text plus a derived filename and MIME type. Nothing is
//! retained after the download is offered.

/// MIME type used for every exported snippet.
pub const TEXT_PLAIN: &str = "text/plain";

/// A downloadable snippet: filename, MIME type, and UTF-8 content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub content: String,
}

impl ExportArtifact {
    /// Plain-text artifact with the given filename and content.
    pub fn text(filename: String, content: String) -> Self {
        Self {
            filename,
            mime: TEXT_PLAIN,
            content,
        }
    }
}

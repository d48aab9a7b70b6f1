//! Pure domain logic for the Navstack showcase site.
//!
//! Holds everything that does not need a browser: the selection model for
//! the two playgrounds, the per-framework code generators, and the export
//! artifact derivation (filename, MIME type, snippet text).
//!
//! The two playgrounds are intentionally independent (see `DESIGN.md`):
//!
//! - [`playground`] - the customizer with theme/device/variant/layout axes
//!   and a react/nextjs/vue/bootstrap framework axis.
//! - [`stack`] - the ready-to-use navbar with a fixed visual style and a
//!   react/nextjs/vue/html framework axis.
//!
//! All generators are total, deterministic functions of their inputs and
//! return trim-normalized text (no leading/trailing blank lines), so the
//! displayed snippet, the clipboard payload, and the downloaded file are
//! byte-identical.

pub mod error;
pub mod export;
pub mod playground;
pub mod stack;

pub use error::ParseAxisError;
pub use export::ExportArtifact;

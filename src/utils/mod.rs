//! Utility modules for browser APIs and timers.
//!
//! - [`dom`] - clipboard, blob download, and window helpers
//! - [`Cooldown`], [`Debounce`] - cancellable timer handles owned by the
//!   component that created them

pub mod dom;
mod timer;

pub use timer::{Cooldown, Debounce};

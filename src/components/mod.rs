//! UI components built with Leptos.
//!
//! - [`router`] - application routing (main entry point)
//! - [`navbar`] - site navbar with search, filters, and notifications
//! - [`home`] - landing page sections (hero, showcase, stats, testimonials)
//! - [`playground`] - customizer playground (theme/variant/layout/framework)
//! - [`stack`] - ready-to-use navbar playground
//! - [`export`] - copy/download controls shared by both playgrounds
//! - [`icons`] - centralized icon definitions

pub mod export;
pub mod footer;
pub mod home;
pub mod icons;
pub mod navbar;
pub mod playground;
pub mod router;
pub mod stack;

pub use router::AppRouter;

//! Site navbar and its widgets.
//!
//! - [`SiteNavbar`] - fixed top navigation with scroll-aware chrome
//! - [`Dropdown`] - generic overlay primitive (outside click / Escape)
//! - search bar with debounced suggestions and filter dropdowns

mod dropdown;
mod navbar;
mod notifications;
mod search;
mod suggestions;

pub use dropdown::Dropdown;
pub use navbar::SiteNavbar;

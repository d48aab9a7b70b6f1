//! Data models for the application.
//!
//! - [`Route`] - hash-based navigation between the three pages
//! - [`Stat`], [`Testimonial`] - static home-page content records

mod content;
mod route;

pub use content::{Stat, Testimonial};
pub use route::Route;

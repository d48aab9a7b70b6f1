//! Landing page sections.

mod about;
mod demo;
mod hero;
mod scroll_cue;
mod showcase;
mod stats;
mod testimonials;

pub use about::About;
pub use demo::NavbarDemo;
pub use hero::Hero;
pub use scroll_cue::ScrollCue;
pub use showcase::Showcase;
pub use stats::Stats;
pub use testimonials::Testimonials;

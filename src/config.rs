//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use crate::models::{Stat, Testimonial};

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the site navbar and footer.
pub const APP_NAME: &str = "Navstack";

/// Tagline shown under the hero title.
pub const APP_TAGLINE: &str =
    "Provides a navbar library for developers and maximizes your potential";

// =============================================================================
// Timer Configuration
// =============================================================================

/// How long the "Copied!" acknowledgement stays visible after a copy.
pub const COPY_ACK_MS: u32 = 2000;

/// Debounce applied to free-text search input before suggestions appear.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Auto-advance interval for the testimonial carousel.
pub const TESTIMONIAL_INTERVAL_MS: u32 = 5000;

// =============================================================================
// Site Navbar Configuration
// =============================================================================

/// Scroll offset (px) past which the site navbar tightens its padding.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

/// Search filter options.
pub const FRAMEWORK_FILTERS: &[&str] = &["React", "Next.js", "Vue", "Angular", "Svelte"];
pub const STYLE_FILTERS: &[&str] = &["Modern", "Minimalist", "Classic", "Futuristic"];

// =============================================================================
// Playground Configuration
// =============================================================================

/// Menu entries rendered by the customizer playground, in order. The same
/// sequence feeds the preview and every generated snippet.
pub const PLAYGROUND_MENU: [&str; 2] = ["Home", "Template"];

/// Menu entries for the stack playground.
pub const STACK_MENU: [&str; 3] = ["Features", "Pricing", "Company"];

// =============================================================================
// Showcase Configuration
// =============================================================================

/// Video shown in the home-page showcase section.
pub const SHOWCASE_VIDEO_URL: &str =
    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4";

/// Fraction of the showcase video that must be visible before it autoplays.
pub const SHOWCASE_VISIBILITY_THRESHOLD: f64 = 0.5;

// =============================================================================
// Home Page Content
// =============================================================================

/// Statistics strip entries.
pub const STATS: [Stat; 3] = [
    Stat {
        value: 50,
        suffix: "+",
        label: "Framework",
    },
    Stat {
        value: 100,
        suffix: "+",
        label: "Templates",
    },
    Stat {
        value: 1,
        suffix: "x",
        label: "Performance (Fast)",
    },
];

/// Testimonial carousel entries.
pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "It saved my life and brought me back to myself",
        description: "Through Navstack, we provide a collection of ready-to-use navbar \
             templates that can be integrated with various popular frameworks like \
             Tailwind, Bootstrap, React, Vue, and standard HTML & CSS.",
        author: "Sarah Johnson",
        role: "UX Designer",
        rating: 5,
    },
    Testimonial {
        quote: "This tool made my workflow 10x faster!",
        description: "I never thought creating navbars could be this easy. With Navstack, \
             I can generate custom navbars in seconds and integrate them with any \
             project seamlessly.",
        author: "Michael Carter",
        role: "Frontend Developer",
        rating: 4,
    },
    Testimonial {
        quote: "A must-have for every developer!",
        description: "Navstack gave me pre-built navbar templates and a playground to \
             generate unique ones. It saved me hours of repetitive coding.",
        author: "Emily Davis",
        role: "Software Engineer",
        rating: 5,
    },
];

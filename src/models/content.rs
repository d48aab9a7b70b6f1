//! Static content records for the home page sections.

/// One entry of the statistics strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

/// One testimonial carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    /// Star rating out of 5.
    pub rating: u8,
}

//! Hash-based routing between the three pages.

/// Application routes, addressed as `#/`, `#/template`, `#/playground`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Route {
    /// Landing page: hero, showcase, stats, testimonials.
    #[default]
    Home,
    /// Ready-to-use navbar page with the stack playground.
    Template,
    /// Customizer playground page.
    Playground,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Self; 3] = [Self::Home, Self::Template, Self::Playground];

    /// Parse a URL hash into a route. Unknown paths fall back to home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        match path {
            "template" => Self::Template,
            "playground" => Self::Playground,
            _ => Self::Home,
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Template => "#/template",
            Self::Playground => "#/playground",
        }
    }

    /// Label used for navigation links.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Template => "Template",
            Self::Playground => "Playground",
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&hash)
    }

    /// Navigate to this route. Setting the hash fires `hashchange`, which
    /// the router listens for, and pushes a history entry so back/forward
    /// keep working.
    pub fn push(self) {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_hash(self.to_hash());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_hashes() {
        assert_eq!(Route::from_hash(""), Route::Home);
        assert_eq!(Route::from_hash("#"), Route::Home);
        assert_eq!(Route::from_hash("#/"), Route::Home);
        assert_eq!(Route::from_hash("#/template"), Route::Template);
        assert_eq!(Route::from_hash("#/template/"), Route::Template);
        assert_eq!(Route::from_hash("#/playground"), Route::Playground);
    }

    #[test]
    fn unknown_hash_falls_back_to_home() {
        assert_eq!(Route::from_hash("#/does-not-exist"), Route::Home);
    }

    #[test]
    fn round_trips_through_hash() {
        for route in [Route::Home, Route::Template, Route::Playground] {
            assert_eq!(Route::from_hash(route.to_hash()), route);
        }
    }
}

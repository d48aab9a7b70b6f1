//! Style composition for the customizer's generated markup.
//!
//! The react/nextjs/vue targets all embed one composed utility-class
//! expression derived from `(variant, theme)`. The bootstrap target is the
//! odd one out: it maps the same pair onto component-native class names and,
//! for glass and gradient, an inline background style (see [`codegen`]).
//!
//! [`codegen`]: super::codegen

use super::selection::{Theme, Variant};

/// The shared navbar class expression for utility-class targets.
///
/// Deterministic in `(variant, theme)`; the live preview mirrors the same
/// visual treatment so the snippet matches what the user sees.
pub fn navbar_class(variant: Variant, theme: Theme) -> String {
    match variant {
        Variant::Glass => {
            let bg = match theme {
                Theme::Light => "bg-white/10",
                Theme::Dark => "bg-black/20",
            };
            format!(
                "w-full {bg} backdrop-blur-md border border-white/20 px-6 py-4 \
                 flex items-center justify-between rounded-2xl shadow-lg transition"
            )
        }
        Variant::Minimal => {
            let scheme = match theme {
                Theme::Light => "bg-white text-gray-900",
                Theme::Dark => "bg-gray-900 text-white",
            };
            format!(
                "w-full {scheme} px-6 py-4 flex items-center justify-between \
                 border-b shadow-sm transition"
            )
        }
        Variant::Gradient => "w-full bg-gradient-to-r from-indigo-500 to-pink-500 px-6 py-4 \
             flex items-center justify-between rounded-2xl shadow-lg transition text-white"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glass_encodes_translucency_and_blur() {
        let light = navbar_class(Variant::Glass, Theme::Light);
        assert!(light.contains("bg-white/10"));
        assert!(light.contains("backdrop-blur-md"));

        let dark = navbar_class(Variant::Glass, Theme::Dark);
        assert!(dark.contains("bg-black/20"));
        assert!(dark.contains("backdrop-blur-md"));
    }

    #[test]
    fn minimal_switches_scheme_with_theme() {
        assert!(navbar_class(Variant::Minimal, Theme::Light).contains("bg-white text-gray-900"));
        assert!(navbar_class(Variant::Minimal, Theme::Dark).contains("bg-gray-900 text-white"));
    }

    #[test]
    fn gradient_ignores_theme() {
        let light = navbar_class(Variant::Gradient, Theme::Light);
        let dark = navbar_class(Variant::Gradient, Theme::Dark);
        assert_eq!(light, dark);
        assert!(light.contains("bg-gradient-to-r from-indigo-500 to-pink-500"));
    }
}

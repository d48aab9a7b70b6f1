//! Snippet generator for the customizer playground.
//!
//! A pure mapping `(framework, variant, theme, menu entries) -> text`.
//! Every target emits the same semantic structure: brand mark, the ordered
//! menu list, and one "Sign Up" primary action. Utility-class targets embed
//! the composed class expression from [`navbar_class`]; the bootstrap
//! target branches into its own class names and, for glass and gradient,
//! an inline background style.

use crate::export::ExportArtifact;

use super::selection::{Framework, Theme, Variant};
use super::style::navbar_class;

/// Render the menu entries as plain `<li>` anchors, preserving order.
fn menu_list(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|item| format!("<li><a href=\"#\">{item}</a></li>"))
        .collect::<Vec<_>>()
        .join("\n      ")
}

/// Inner navbar markup shared by the utility-class targets.
fn tailwind_content(entries: &[&str]) -> String {
    format!(
        r##"
  <div class="flex items-center gap-2 font-bold text-lg">
    <span>🔥</span> Navstack
  </div>
  <div class="hidden md:flex items-center gap-6">
    <ul class="flex gap-6">
      {items}
    </ul>
    <button class="bg-indigo-600 hover:bg-indigo-700 text-white px-4 py-1.5 rounded-md font-medium">Sign Up</button>
  </div>"##,
        items = menu_list(entries)
    )
}

/// Bootstrap encodes theme/variant as discrete class/style branches instead
/// of one composed class string.
fn bootstrap_chrome(variant: Variant, theme: Theme) -> (String, String) {
    let mut classes = String::from("navbar navbar-expand-lg shadow-sm");
    let mut styles = String::new();

    match variant {
        Variant::Minimal => {
            classes.push_str(match theme {
                Theme::Dark => " navbar-dark bg-dark",
                Theme::Light => " bg-body-tertiary",
            });
        }
        Variant::Gradient => {
            classes.push_str(" navbar-dark");
            styles.push_str(r#" style="background: linear-gradient(to right, #6366f1, #ec4899);""#);
        }
        Variant::Glass => {
            if theme == Theme::Dark {
                classes.push_str(" navbar-dark");
            }
            let bg = match theme {
                Theme::Dark => "rgba(0,0,0,0.2)",
                Theme::Light => "rgba(255,255,255,0.1)",
            };
            styles.push_str(&format!(
                r#" style="background-color: {bg}; backdrop-filter: blur(10px);""#
            ));
        }
    }

    (classes, styles)
}

fn bootstrap_markup(variant: Variant, theme: Theme, entries: &[&str]) -> String {
    let (classes, styles) = bootstrap_chrome(variant, theme);
    let items = entries
        .iter()
        .map(|item| format!("<li class=\"nav-item\"><a class=\"nav-link\" href=\"#\">{item}</a></li>"))
        .collect::<Vec<_>>()
        .join("\n        ");

    format!(
        r##"
<nav class="{classes}"{styles}>
  <div class="container-fluid">
    <a class="navbar-brand fw-bold" href="#">🔥 Navstack</a>
    <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav">
      <span class="navbar-toggler-icon"></span>
    </button>
    <div class="collapse navbar-collapse" id="navbarNav">
      <ul class="navbar-nav ms-auto mb-2 mb-lg-0">
        {items}
      </ul>
      <button class="btn btn-primary ms-lg-3" type="button">Sign Up</button>
    </div>
  </div>
</nav>
"##
    )
}

/// Generate the snippet for one framework target.
///
/// Total and deterministic; the returned string is trim-normalized so the
/// displayed code, the clipboard payload, and the exported file agree.
pub fn generate(framework: Framework, variant: Variant, theme: Theme, entries: &[&str]) -> String {
    let raw = match framework {
        Framework::React => {
            format!(
                "<nav className=\"{}\">{}</nav>",
                navbar_class(variant, theme),
                tailwind_content(entries)
            )
        }
        Framework::Nextjs => {
            format!(
                "\"use client\";\n\nexport default function Navbar() {{\n  return (\n    <nav className=\"{}\">{}</nav>\n  );\n}}",
                navbar_class(variant, theme),
                tailwind_content(entries)
            )
        }
        Framework::Vue => {
            format!(
                "<template>\n  <nav class=\"{}\">{}</nav>\n</template>",
                navbar_class(variant, theme),
                tailwind_content(entries)
            )
        }
        Framework::Bootstrap => bootstrap_markup(variant, theme, entries),
    };

    raw.trim().to_string()
}

/// Package the current snippet for the browser save flow.
///
/// Filename rule: `navbar-<framework>.txt`, always plain text.
pub fn export_artifact(
    framework: Framework,
    variant: Variant,
    theme: Theme,
    entries: &[&str],
) -> ExportArtifact {
    ExportArtifact::text(
        format!("navbar-{framework}.txt"),
        generate(framework, variant, theme, entries),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: [&str; 2] = ["Home", "Template"];

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn generation_is_deterministic() {
        for framework in Framework::ALL {
            for variant in Variant::ALL {
                for theme in Theme::ALL {
                    let a = generate(framework, variant, theme, &MENU);
                    let b = generate(framework, variant, theme, &MENU);
                    assert_eq!(a, b, "{framework} {variant:?} {theme:?}");
                }
            }
        }
    }

    #[test]
    fn output_is_trim_normalized() {
        for framework in Framework::ALL {
            let code = generate(framework, Variant::Glass, Theme::Light, &MENU);
            assert_eq!(code, code.trim());
            assert!(!code.is_empty());
        }
    }

    #[test]
    fn every_target_lists_entries_in_order_exactly_once() {
        for framework in Framework::ALL {
            let code = generate(framework, Variant::Minimal, Theme::Light, &MENU);
            assert_eq!(occurrences(&code, ">Home<"), 1, "{framework}");
            assert_eq!(occurrences(&code, ">Template<"), 1, "{framework}");
            let home = code.find(">Home<").unwrap();
            let template = code.find(">Template<").unwrap();
            assert!(home < template, "{framework}: order not preserved");
        }
    }

    #[test]
    fn every_target_has_brand_and_primary_action() {
        for framework in Framework::ALL {
            let code = generate(framework, Variant::Glass, Theme::Dark, &MENU);
            assert!(code.contains("Navstack"), "{framework}: brand missing");
            assert_eq!(occurrences(&code, "Sign Up"), 1, "{framework}");
        }
    }

    #[test]
    fn framework_changes_syntax_but_not_content() {
        let react = generate(Framework::React, Variant::Glass, Theme::Light, &MENU);
        let vue = generate(Framework::Vue, Variant::Glass, Theme::Light, &MENU);
        let bootstrap = generate(Framework::Bootstrap, Variant::Glass, Theme::Light, &MENU);

        assert_ne!(react, vue);
        assert_ne!(react, bootstrap);
        for code in [&react, &vue, &bootstrap] {
            assert_eq!(occurrences(code, ">Home<"), 1);
            assert_eq!(occurrences(code, ">Template<"), 1);
            assert_eq!(occurrences(code, "Sign Up"), 1);
        }
        // Same composed class expression on both utility-class targets.
        assert!(react.contains("bg-white/10 backdrop-blur-md"));
        assert!(vue.contains("bg-white/10 backdrop-blur-md"));
    }

    #[test]
    fn nextjs_wraps_markup_in_a_client_component() {
        let code = generate(Framework::Nextjs, Variant::Minimal, Theme::Dark, &MENU);
        assert!(code.starts_with("\"use client\";"));
        assert!(code.contains("export default function Navbar()"));
        assert!(code.contains("bg-gray-900 text-white"));
    }

    #[test]
    fn vue_wraps_markup_in_a_template_block() {
        let code = generate(Framework::Vue, Variant::Gradient, Theme::Light, &MENU);
        assert!(code.starts_with("<template>"));
        assert!(code.ends_with("</template>"));
        // Vue uses plain class, not className.
        assert!(!code.contains("className"));
    }

    #[test]
    fn bootstrap_branches_per_variant_and_theme() {
        let minimal_dark = generate(Framework::Bootstrap, Variant::Minimal, Theme::Dark, &MENU);
        assert!(minimal_dark.contains("navbar-dark bg-dark"));
        assert!(!minimal_dark.contains("style="));

        let minimal_light = generate(Framework::Bootstrap, Variant::Minimal, Theme::Light, &MENU);
        assert!(minimal_light.contains("bg-body-tertiary"));

        let gradient = generate(Framework::Bootstrap, Variant::Gradient, Theme::Light, &MENU);
        assert!(gradient.contains("linear-gradient(to right, #6366f1, #ec4899)"));

        let glass_light = generate(Framework::Bootstrap, Variant::Glass, Theme::Light, &MENU);
        assert!(glass_light.contains("rgba(255,255,255,0.1)"));
        assert!(glass_light.contains("backdrop-filter: blur(10px)"));

        let glass_dark = generate(Framework::Bootstrap, Variant::Glass, Theme::Dark, &MENU);
        assert!(glass_dark.contains("rgba(0,0,0,0.2)"));
        assert!(glass_dark.contains("navbar-dark"));
    }

    #[test]
    fn glass_light_react_scenario() {
        let entries = ["Features", "Pricing", "Company"];
        let code = generate(Framework::React, Variant::Glass, Theme::Light, &entries);

        assert!(code.contains("<nav className=\""));
        assert!(code.contains("bg-white/10"));
        assert!(code.contains("backdrop-blur-md"));
        assert_eq!(occurrences(&code, "<li>"), 3);
        let f = code.find(">Features<").unwrap();
        let p = code.find(">Pricing<").unwrap();
        let c = code.find(">Company<").unwrap();
        assert!(f < p && p < c);
        assert_eq!(occurrences(&code, "Sign Up"), 1);
    }

    #[test]
    fn export_filename_follows_framework() {
        for (framework, expected) in [
            (Framework::React, "navbar-react.txt"),
            (Framework::Nextjs, "navbar-nextjs.txt"),
            (Framework::Vue, "navbar-vue.txt"),
            (Framework::Bootstrap, "navbar-bootstrap.txt"),
        ] {
            let artifact = export_artifact(framework, Variant::Glass, Theme::Light, &MENU);
            assert_eq!(artifact.filename, expected);
            assert_eq!(artifact.mime, "text/plain");
            assert_eq!(
                artifact.content,
                generate(framework, Variant::Glass, Theme::Light, &MENU)
            );
        }
    }
}

//! Snippet generator for the stack playground.
//!
//! Unlike the customizer, the visual style here is fixed: every target
//! shares [`NAVBAR_CLASSES`] and [`MOBILE_MENU_CLASSES`], and the generated
//! code ships a working mobile menu (stateful toggle in react/nextjs/vue, a
//! small script block for plain HTML). Templates are kept as constants with
//! `__MARKER__` placeholders so the JSX/Vue braces stay literal.

use crate::export::ExportArtifact;

use super::selection::StackFramework;

/// Navbar class list shared by the preview and every generated snippet.
pub const NAVBAR_CLASSES: &str = "w-full flex items-center justify-between px-4 py-3 bg-white/70 \
     backdrop-blur-lg border border-slate-200 rounded-xl text-slate-800 shadow-sm";

/// Mobile dropdown panel class list, same sharing rule.
pub const MOBILE_MENU_CLASSES: &str = "absolute top-full left-0 w-full mt-2 bg-white/95 \
     backdrop-blur-lg border border-slate-200 rounded-xl shadow-lg p-5";

const REACT_TEMPLATE: &str = r##"
import { useState } from 'react';
import { Menu, X } from 'lucide-react';

export default function Navbar() {
  const [isOpen, setIsOpen] = useState(false);
  const menuItems = [__MENU_ARRAY__];

  return (
    <div className="relative">
      <nav className="__NAVBAR_CLASSES__">
        <div className="font-bold text-xl text-slate-900">YourLogo</div>
        {/* Desktop Menu */}
        <div className="hidden md:flex items-center gap-6">
          <ul className="flex items-center gap-6">
            {menuItems.map((item) => (
              <li key={item}>
                <a href="#" className="text-slate-600 hover:text-sky-500 transition-colors">{item}</a>
              </li>
            ))}
          </ul>
          <button className="bg-sky-500 hover:bg-sky-600 text-white px-4 py-1.5 rounded-md font-medium transition-colors">
            Sign Up
          </button>
        </div>
        {/* Mobile Menu Button */}
        <button
          className="md:hidden"
          onClick={() => setIsOpen(!isOpen)}
          aria-label="Toggle menu"
          aria-expanded={isOpen}
        >
          {isOpen ? <X size={24} /> : <Menu size={24} />}
        </button>
      </nav>
      {/* Mobile Menu */}
      {isOpen && (
        <div className="__MOBILE_MENU_CLASSES__">
          <ul className="flex flex-col gap-4">
            {menuItems.map((item) => (
              <li key={item}>
                <a href="#" className="text-slate-600 hover:text-sky-500 text-lg">{item}</a>
              </li>
            ))}
          </ul>
          <button className="bg-sky-500 hover:bg-sky-600 text-white w-full py-2.5 rounded-md font-medium transition-colors mt-5">
            Sign Up
          </button>
        </div>
      )}
    </div>
  );
}"##;

const NEXTJS_TEMPLATE: &str = r##"
"use client";
import { useState } from 'react';
import Link from 'next/link';
import { Menu, X } from 'lucide-react';

export default function Navbar() {
  const [isOpen, setIsOpen] = useState(false);
  const menuItems = [__MENU_ARRAY__];

  return (
    <div className="relative">
      <nav className="__NAVBAR_CLASSES__">
        <div className="font-bold text-xl text-slate-900">YourLogo</div>
        {/* Desktop Menu */}
        <div className="hidden md:flex items-center gap-6">
          <ul className="flex items-center gap-6">
            {menuItems.map((item) => (
              <li key={item}>
                <Link href="#" className="text-slate-600 hover:text-sky-500 transition-colors">{item}</Link>
              </li>
            ))}
          </ul>
          <button className="bg-sky-500 hover:bg-sky-600 text-white px-4 py-1.5 rounded-md font-medium transition-colors">
            Sign Up
          </button>
        </div>
        {/* Mobile Menu Button */}
        <button
          className="md:hidden"
          onClick={() => setIsOpen(!isOpen)}
          aria-label="Toggle menu"
          aria-expanded={isOpen}
        >
          {isOpen ? <X size={24} /> : <Menu size={24} />}
        </button>
      </nav>
      {/* Mobile Menu */}
      {isOpen && (
        <div className="__MOBILE_MENU_CLASSES__">
          <ul className="flex flex-col gap-4">
            {menuItems.map((item) => (
              <li key={item}>
                <Link href="#" className="text-slate-600 hover:text-sky-500 text-lg">{item}</Link>
              </li>
            ))}
          </ul>
          <button className="bg-sky-500 hover:bg-sky-600 text-white w-full py-2.5 rounded-md font-medium transition-colors mt-5">
            Sign Up
          </button>
        </div>
      )}
    </div>
  );
}"##;

const VUE_TEMPLATE: &str = r##"
<template>
  <div class="relative">
    <nav class="__NAVBAR_CLASSES__">
      <div class="font-bold text-xl text-slate-900">YourLogo</div>
      <div class="hidden md:flex items-center gap-6">
        <ul class="flex items-center gap-6">
          <li v-for="item in menuItems" :key="item">
            <a href="#" class="text-slate-600 hover:text-sky-500 transition-colors">{{ item }}</a>
          </li>
        </ul>
        <button class="bg-sky-500 hover:bg-sky-600 text-white px-4 py-1.5 rounded-md font-medium transition-colors">
          Sign Up
        </button>
      </div>
      <button
        class="md:hidden"
        @click="isOpen = !isOpen"
        aria-label="Toggle menu"
        :aria-expanded="isOpen"
      >
        <svg v-if="isOpen" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>
        <svg v-else xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="4" x2="20" y1="12" y2="12"></line><line x1="4" x2="20" y1="6" y2="6"></line><line x1="4" x2="20" y1="18" y2="18"></line></svg>
      </button>
    </nav>
    <div v-if="isOpen" class="__MOBILE_MENU_CLASSES__">
      <ul class="flex flex-col gap-4">
        <li v-for="item in menuItems" :key="item">
          <a href="#" class="text-slate-600 hover:text-sky-500 text-lg">{{ item }}</a>
        </li>
      </ul>
      <button class="bg-sky-500 hover:bg-sky-600 text-white w-full py-2.5 rounded-md font-medium transition-colors mt-5">
        Sign Up
      </button>
    </div>
  </div>
</template>

<script setup>
import { ref } from 'vue';

const isOpen = ref(false);
const menuItems = ref([__MENU_ARRAY__]);
</script>
"##;

const HTML_TEMPLATE: &str = r##"
<div class="relative font-sans">
  <nav class="__NAVBAR_CLASSES__">
    <div class="font-bold text-xl text-slate-900">YourLogo</div>
    <div class="hidden md:flex items-center gap-6">
      <ul class="flex items-center gap-6">
        __DESKTOP_ITEMS__
      </ul>
      <button class="bg-sky-500 hover:bg-sky-600 text-white px-4 py-1.5 rounded-md font-medium transition-colors">
        Sign Up
      </button>
    </div>
    <button
      id="menu-toggle"
      class="md:hidden"
      aria-label="Toggle menu"
      aria-expanded="false"
    >
      <svg id="menu-icon-open" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="4" x2="20" y1="12" y2="12"></line><line x1="4" x2="20" y1="6" y2="6"></line><line x1="4" x2="20" y1="18" y2="18"></line></svg>
      <svg id="menu-icon-close" class="hidden" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><line x1="18" y1="6" x2="6" y2="18"></line><line x1="6" y1="6" x2="18" y2="18"></line></svg>
    </button>
  </nav>

  <div id="mobile-menu" class="hidden __MOBILE_MENU_CLASSES__">
    <ul class="flex flex-col gap-4">
      __MOBILE_ITEMS__
    </ul>
    <button class="bg-sky-500 hover:bg-sky-600 text-white w-full py-2.5 rounded-md font-medium transition-colors mt-5">
      Sign Up
    </button>
  </div>
</div>

<script>
  const menuToggle = document.getElementById('menu-toggle');
  const mobileMenu = document.getElementById('mobile-menu');
  const openIcon = document.getElementById('menu-icon-open');
  const closeIcon = document.getElementById('menu-icon-close');

  menuToggle.addEventListener('click', () => {
    const isExpanded = menuToggle.getAttribute('aria-expanded') === 'true';
    mobileMenu.classList.toggle('hidden');
    openIcon.classList.toggle('hidden');
    closeIcon.classList.toggle('hidden');
    menuToggle.setAttribute('aria-expanded', !isExpanded);
  });
</script>
"##;

/// Render entries as a JS/Vue array literal body, preserving order.
fn menu_array(entries: &[&str]) -> String {
    entries
        .iter()
        .map(|item| format!("\"{item}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

fn html_items(entries: &[&str], link_classes: &str, indent: &str) -> String {
    entries
        .iter()
        .map(|item| format!("<li><a href=\"#\" class=\"{link_classes}\">{item}</a></li>"))
        .collect::<Vec<_>>()
        .join(&format!("\n{indent}"))
}

/// Generate the snippet for one framework target.
///
/// Pure string substitution over the fixed templates; trim-normalized.
pub fn generate(framework: StackFramework, entries: &[&str]) -> String {
    let template = match framework {
        StackFramework::React => REACT_TEMPLATE,
        StackFramework::Nextjs => NEXTJS_TEMPLATE,
        StackFramework::Vue => VUE_TEMPLATE,
        StackFramework::Html => HTML_TEMPLATE,
    };

    template
        .replace("__NAVBAR_CLASSES__", NAVBAR_CLASSES)
        .replace("__MOBILE_MENU_CLASSES__", MOBILE_MENU_CLASSES)
        .replace("__MENU_ARRAY__", &menu_array(entries))
        .replace(
            "__DESKTOP_ITEMS__",
            &html_items(entries, "text-slate-600 hover:text-sky-500 transition-colors", "        "),
        )
        .replace(
            "__MOBILE_ITEMS__",
            &html_items(entries, "text-slate-600 hover:text-sky-500 text-lg", "      "),
        )
        .trim()
        .to_string()
}

/// Package the current snippet for the browser save flow.
///
/// Filename rule: `Navbar-Component.<ext>` with the extension drawn from
/// [`StackFramework::extension`]; the blob itself is always plain text.
pub fn export_artifact(framework: StackFramework, entries: &[&str]) -> ExportArtifact {
    ExportArtifact::text(
        format!("Navbar-Component.{}", framework.extension()),
        generate(framework, entries),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU: [&str; 3] = ["Features", "Pricing", "Company"];

    fn occurrences(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn generation_is_deterministic() {
        for framework in StackFramework::ALL {
            assert_eq!(generate(framework, &MENU), generate(framework, &MENU));
        }
    }

    #[test]
    fn output_is_trim_normalized() {
        for framework in StackFramework::ALL {
            let code = generate(framework, &MENU);
            assert_eq!(code, code.trim());
        }
    }

    #[test]
    fn entries_appear_in_order_in_every_target() {
        for framework in StackFramework::ALL {
            let code = generate(framework, &MENU);
            let f = code.find("Features").expect("Features missing");
            let p = code.find("Pricing").expect("Pricing missing");
            let c = code.find("Company").expect("Company missing");
            assert!(f < p && p < c, "{framework}: order not preserved");
            assert!(code.contains("Sign Up"), "{framework}");
            assert!(code.contains("YourLogo"), "{framework}");
        }
    }

    #[test]
    fn stateful_targets_declare_entries_once() {
        // react/nextjs/vue carry the list as one array literal and loop over
        // it; the labels therefore occur exactly once in the source.
        for framework in [
            StackFramework::React,
            StackFramework::Nextjs,
            StackFramework::Vue,
        ] {
            let code = generate(framework, &MENU);
            assert_eq!(occurrences(&code, "\"Features\""), 1, "{framework}");
            assert_eq!(occurrences(&code, "\"Pricing\""), 1, "{framework}");
            assert_eq!(occurrences(&code, "\"Company\""), 1, "{framework}");
        }
    }

    #[test]
    fn html_target_inlines_desktop_and_mobile_lists() {
        let code = generate(StackFramework::Html, &MENU);
        // One desktop list, one (hidden) mobile list.
        assert_eq!(occurrences(&code, ">Features<"), 2);
        assert_eq!(occurrences(&code, ">Pricing<"), 2);
        assert_eq!(occurrences(&code, ">Company<"), 2);
        assert!(code.contains("menuToggle.addEventListener"));
        assert!(code.contains("aria-expanded"));
    }

    #[test]
    fn shared_style_is_embedded_everywhere() {
        for framework in StackFramework::ALL {
            let code = generate(framework, &MENU);
            assert!(code.contains(NAVBAR_CLASSES), "{framework}");
            assert!(code.contains(MOBILE_MENU_CLASSES), "{framework}");
            assert!(!code.contains("__"), "{framework}: unexpanded marker");
        }
    }

    #[test]
    fn target_syntax_markers() {
        assert!(generate(StackFramework::React, &MENU).starts_with("import { useState }"));
        let nextjs = generate(StackFramework::Nextjs, &MENU);
        assert!(nextjs.starts_with("\"use client\";"));
        assert!(nextjs.contains("import Link from 'next/link';"));
        let vue = generate(StackFramework::Vue, &MENU);
        assert!(vue.contains("v-for=\"item in menuItems\""));
        assert!(vue.contains("<script setup>"));
        assert!(generate(StackFramework::Html, &MENU).contains("getElementById('menu-toggle')"));
    }

    #[test]
    fn export_filename_uses_extension_table() {
        for (framework, expected) in [
            (StackFramework::React, "Navbar-Component.jsx"),
            (StackFramework::Nextjs, "Navbar-Component.jsx"),
            (StackFramework::Vue, "Navbar-Component.vue"),
            (StackFramework::Html, "Navbar-Component.html"),
        ] {
            let artifact = export_artifact(framework, &MENU);
            assert_eq!(artifact.filename, expected);
            assert_eq!(artifact.mime, "text/plain");
            assert_eq!(artifact.content, generate(framework, &MENU));
        }
    }
}

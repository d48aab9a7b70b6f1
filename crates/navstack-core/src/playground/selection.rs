//! Selection model for the customizer playground.
//!
//! Five orthogonal enumerated axes. Exactly one value per axis at all
//! times; [`Selection::default`] is the documented initial state and
//! [`Selection::reset`] restores it wholesale.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAxisError;

/// Color scheme of the previewed/generated navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Human-readable control label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// Simulated viewport width for the preview container.
///
/// Affects only the preview; generated code is device-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Device {
    Mobile,
    Tablet,
    #[default]
    Desktop,
}

impl Device {
    pub const ALL: [Self; 3] = [Self::Mobile, Self::Tablet, Self::Desktop];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobile => "mobile",
            Self::Tablet => "tablet",
            Self::Desktop => "desktop",
        }
    }
}

/// Visual style preset of the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Glass,
    Minimal,
    Gradient,
}

impl Variant {
    pub const ALL: [Self; 3] = [Self::Glass, Self::Minimal, Self::Gradient];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Glass => "glass",
            Self::Minimal => "minimal",
            Self::Gradient => "gradient",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Glass => "Glass",
            Self::Minimal => "Minimal",
            Self::Gradient => "Gradient",
        }
    }
}

/// Outer container width policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    Full,
    Boxed,
    Centered,
}

impl Layout {
    pub const ALL: [Self; 3] = [Self::Full, Self::Boxed, Self::Centered];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Boxed => "boxed",
            Self::Centered => "centered",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Full => "Full Width",
            Self::Boxed => "Boxed",
            Self::Centered => "Centered",
        }
    }
}

/// Target framework for the generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framework {
    #[default]
    React,
    Nextjs,
    Vue,
    Bootstrap,
}

impl Framework {
    pub const ALL: [Self; 4] = [Self::React, Self::Nextjs, Self::Vue, Self::Bootstrap];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Nextjs => "nextjs",
            Self::Vue => "vue",
            Self::Bootstrap => "bootstrap",
        }
    }

    /// Label shown in the framework `<select>` control.
    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React + Tailwind",
            Self::Nextjs => "Next.js + Tailwind",
            Self::Vue => "Vue + Tailwind",
            Self::Bootstrap => "Bootstrap",
        }
    }
}

impl FromStr for Theme {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("theme", s))
    }
}

impl FromStr for Device {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("device", s))
    }
}

impl FromStr for Variant {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("variant", s))
    }
}

impl FromStr for Layout {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("layout", s))
    }
}

impl FromStr for Framework {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("framework", s))
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The current set of option values governing preview and code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub theme: Theme,
    pub device: Device,
    pub variant: Variant,
    pub layout: Layout,
    pub framework: Framework,
}

impl Selection {
    /// Restore every axis to its default in one assignment.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_selection() {
        let s = Selection::default();
        assert_eq!(s.theme, Theme::Light);
        assert_eq!(s.device, Device::Desktop);
        assert_eq!(s.variant, Variant::Glass);
        assert_eq!(s.layout, Layout::Full);
        assert_eq!(s.framework, Framework::React);
    }

    #[test]
    fn reset_restores_defaults_regardless_of_prior_state() {
        let mut s = Selection::default();
        s.theme = Theme::Dark;
        s.device = Device::Mobile;
        s.variant = Variant::Gradient;
        s.layout = Layout::Centered;
        s.framework = Framework::Bootstrap;

        s.reset();
        assert_eq!(s, Selection::default());
    }

    #[test]
    fn axis_values_round_trip_through_from_str() {
        for t in Theme::ALL {
            assert_eq!(t.as_str().parse::<Theme>(), Ok(t));
        }
        for d in Device::ALL {
            assert_eq!(d.as_str().parse::<Device>(), Ok(d));
        }
        for v in Variant::ALL {
            assert_eq!(v.as_str().parse::<Variant>(), Ok(v));
        }
        for l in Layout::ALL {
            assert_eq!(l.as_str().parse::<Layout>(), Ok(l));
        }
        for f in Framework::ALL {
            assert_eq!(f.as_str().parse::<Framework>(), Ok(f));
        }
    }

    #[test]
    fn out_of_domain_value_is_rejected() {
        let err = "svelte".parse::<Framework>().unwrap_err();
        assert_eq!(err.axis, "framework");
        assert_eq!(err.value, "svelte");

        assert!("".parse::<Theme>().is_err());
        assert!("GLASS".parse::<Variant>().is_err());
    }
}

//! Framework axis for the stack playground.
//!
//! This instance deliberately differs from the customizer: it swaps
//! bootstrap for a plain HTML target and has no theme/variant/layout axes
//! (the visual style is fixed).

use std::fmt;
use std::str::FromStr;

use crate::error::ParseAxisError;

/// Target framework for the stack playground's generated snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackFramework {
    #[default]
    React,
    Nextjs,
    Vue,
    Html,
}

impl StackFramework {
    pub const ALL: [Self; 4] = [Self::React, Self::Nextjs, Self::Vue, Self::Html];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Nextjs => "nextjs",
            Self::Vue => "vue",
            Self::Html => "html",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::React => "React + Tailwind",
            Self::Nextjs => "Next.js + Tailwind",
            Self::Vue => "Vue + Tailwind",
            Self::Html => "HTML + Tailwind",
        }
    }

    /// File extension for the exported snippet.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::React | Self::Nextjs => "jsx",
            Self::Vue => "vue",
            Self::Html => "html",
        }
    }
}

impl FromStr for StackFramework {
    type Err = ParseAxisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| ParseAxisError::new("framework", s))
    }
}

impl fmt::Display for StackFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_mapping() {
        assert_eq!(StackFramework::React.extension(), "jsx");
        assert_eq!(StackFramework::Nextjs.extension(), "jsx");
        assert_eq!(StackFramework::Vue.extension(), "vue");
        assert_eq!(StackFramework::Html.extension(), "html");
    }

    #[test]
    fn parse_round_trip_and_rejection() {
        for f in StackFramework::ALL {
            assert_eq!(f.as_str().parse::<StackFramework>(), Ok(f));
        }
        assert!("bootstrap".parse::<StackFramework>().is_err());
    }
}

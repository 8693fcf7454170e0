//! Typed theme token table
//!
//! The UI references colors only through CSS custom properties; this module
//! is the single place those properties are defined. Each token is a named
//! struct field, so a palette cannot silently miss one.

use serde::{Deserialize, Serialize};

/// Color scheme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Dark theme (default)
    #[default]
    Dark,
    /// Light theme
    Light,
}

/// Theme token values for one color scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub bg: &'static str,
    pub panel: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub accent: &'static str,
    pub accent_soft: &'static str,
    pub positive: &'static str,
    pub negative: &'static str,
    pub surface_hover: &'static str,
    pub sidebar_width: &'static str,
    pub transition: &'static str,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            bg: "#0b1016",
            panel: "#121a24",
            border: "rgba(255, 255, 255, 0.08)",
            text: "#e8eef6",
            text_muted: "#8494a8",
            accent: "#4fb3a9",
            accent_soft: "rgba(79, 179, 169, 0.14)",
            positive: "#3fb68b",
            negative: "#ef5f62",
            surface_hover: "rgba(255, 255, 255, 0.05)",
            sidebar_width: "260px",
            transition: "180ms ease-out",
        }
    }

    pub fn light() -> Self {
        Self {
            bg: "#f6f9fb",
            panel: "#ffffff",
            border: "rgba(0, 0, 0, 0.08)",
            text: "#15222f",
            text_muted: "#5d6b7c",
            accent: "#0d8a7d",
            accent_soft: "rgba(13, 138, 125, 0.10)",
            positive: "#0ea66c",
            negative: "#d84347",
            surface_hover: "rgba(0, 0, 0, 0.04)",
            sidebar_width: "260px",
            transition: "180ms ease-out",
        }
    }

    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => Self::dark(),
            ColorScheme::Light => Self::light(),
        }
    }

    /// Emit the token table as a CSS custom-property block for `selector`.
    pub fn css_variables(&self, selector: &str) -> String {
        format!(
            "{selector} {{\n  --bg: {};\n  --panel: {};\n  --border: {};\n  --text: {};\n  --text-muted: {};\n  --accent: {};\n  --accent-soft: {};\n  --positive: {};\n  --negative: {};\n  --surface-hover: {};\n  --sidebar-width: {};\n  --transition: {};\n}}\n",
            self.bg,
            self.panel,
            self.border,
            self.text,
            self.text_muted,
            self.accent,
            self.accent_soft,
            self.positive,
            self.negative,
            self.surface_hover,
            self.sidebar_width,
            self.transition,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_scheme(ColorScheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: &[&str] = &[
        "--bg",
        "--panel",
        "--border",
        "--text",
        "--text-muted",
        "--accent",
        "--accent-soft",
        "--positive",
        "--negative",
        "--surface-hover",
        "--sidebar-width",
        "--transition",
    ];

    #[test]
    fn test_css_variables_contain_every_token_once() {
        for theme in [Theme::dark(), Theme::light()] {
            let block = theme.css_variables(":root");
            assert!(block.starts_with(":root {"));
            for token in TOKENS {
                let marker = format!("{token}: ");
                assert_eq!(
                    block.matches(&marker).count(),
                    1,
                    "{token} should appear exactly once"
                );
            }
        }
    }

    #[test]
    fn test_default_scheme_is_dark() {
        assert_eq!(ColorScheme::default(), ColorScheme::Dark);
        assert_eq!(Theme::default(), Theme::dark());
        assert_ne!(Theme::dark().bg, Theme::light().bg);
    }
}

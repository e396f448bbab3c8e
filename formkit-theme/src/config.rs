//! # Theme Configuration
//!
//! The theme is chosen through the `FORMKIT_THEME` environment variable:
//!
//! ```bash
//! export FORMKIT_THEME=gtk           # Gtk look
//! export FORMKIT_THEME=Clearlooks    # case does not matter
//! export FORMKIT_THEME=visualstyles  # only if the app enabled visual styles
//! ```
//!
//! Recognized values are `win32`, `gtk`, `nice`, `clearlooks` and
//! `visualstyles`. Anything else, or no value at all, selects the classic
//! theme. The variable is read once, when the theme is first resolved.
//!
//! A [ThemeConfig] can also be built programmatically, which is how tests and
//! [init_with](crate::engine::init_with) bypass the environment:
//!
//! ```rust
//! use formkit_theme::config::ThemeConfig;
//!
//! let config = ThemeConfig::new().with_selector("GTK");
//! assert_eq!(config.normalized_selector(), "gtk");
//! assert_eq!(ThemeConfig::new().normalized_selector(), "win32");
//! ```

use std::env;

use crate::variant::ThemeVariant;

/// Name of the environment variable holding the theme selector.
pub const THEME_ENV_VAR: &str = "FORMKIT_THEME";

/// The configuration signal driving theme resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeConfig {
    selector: Option<String>,
}

impl ThemeConfig {
    /// A configuration without a selector. Resolves to the default theme.
    pub fn new() -> Self {
        Self { selector: None }
    }

    /// Read the selector from [THEME_ENV_VAR].
    ///
    /// A value that is not valid Unicode counts as absent.
    pub fn from_env() -> Self {
        Self {
            selector: env::var(THEME_ENV_VAR).ok(),
        }
    }

    /// Set the selector.
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// The selector exactly as configured.
    pub fn selector(&self) -> Option<&str> {
        self.selector.as_deref()
    }

    /// The ASCII lower-cased selector, or the default variant's selector when absent.
    pub fn normalized_selector(&self) -> String {
        match &self.selector {
            Some(selector) => selector.to_ascii_lowercase(),
            None => ThemeVariant::default().selector().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_is_kept_verbatim() {
        let config = ThemeConfig::new().with_selector(" Nice ");
        assert_eq!(config.selector(), Some(" Nice "));
        assert_eq!(config.normalized_selector(), " nice ");
    }

    #[test]
    fn only_ascii_letters_are_folded() {
        let config = ThemeConfig::new().with_selector("GT\u{212A}");
        assert_eq!(config.normalized_selector(), "gt\u{212A}");
    }

    #[test]
    fn empty_selector_is_not_absent() {
        let config = ThemeConfig::new().with_selector("");
        assert_eq!(config.selector(), Some(""));
        assert_eq!(config.normalized_selector(), "");
    }
}

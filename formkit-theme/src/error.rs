//! # Theme Error Types
//!
//! Errors produced by the strict parts of the theme API. The global accessor
//! never surfaces these: an unknown or unavailable selector degrades to the
//! default theme instead.

use thiserror::Error;

use crate::variant::ThemeVariant;

/// Errors that can occur while selecting a theme.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// The selector does not name any known theme variant.
    #[error("Unknown theme selector '{selector}'")]
    UnknownSelector {
        /// The selector as it was given.
        selector: String,
    },

    /// The selector names a variant that is not available in this process.
    #[error("Theme '{variant}' is not available")]
    Unavailable {
        /// The variant whose availability check failed.
        variant: ThemeVariant,
    },
}

/// Result type alias for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create an unknown selector error.
    pub fn unknown_selector(selector: impl Into<String>) -> Self {
        Self::UnknownSelector {
            selector: selector.into(),
        }
    }

    /// Create an unavailable variant error.
    pub fn unavailable(variant: ThemeVariant) -> Self {
        Self::Unavailable { variant }
    }
}

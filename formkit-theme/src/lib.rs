#![warn(missing_docs)]

//! # formkit Theme Engine
//!
//! Selects the rendering theme of a formkit application once, at startup, and
//! shares it with every widget-drawing call afterwards.
//!
//! ## Overview
//!
//! - **[Theme](theme::Theme)**: the drawing contract every rendering backend implements
//! - **[ThemeVariant](variant::ThemeVariant)**: the closed set of built-in backends
//! - **[ThemeConfig](config::ThemeConfig)**: the `FORMKIT_THEME` selector
//! - **[ThemeResolver](engine::ThemeResolver)**: maps configuration to a variant
//! - **[current]**: the process-wide active theme
//!
//! ## Quick Start
//!
//! ```rust
//! use formkit_theme::colors::SystemColor;
//!
//! // Opt in before the first paint if the visual styles theme may be used.
//! formkit_theme::application::enable_visual_styles();
//!
//! let theme = formkit_theme::current();
//! let face = theme.color(SystemColor::Control);
//! # let _ = face;
//! ```
//!
//! The selection never fails. A missing, misspelled or unavailable selector
//! falls back to the classic theme; run with `RUST_LOG=debug` under a logger to
//! see why.

/// Application-level availability of conditional variants.
pub mod application;
/// Contains the [colors::ColorTable] and [colors::SystemColor] types.
pub mod colors;
/// Contains the [config::ThemeConfig] struct.
pub mod config;
/// Contains the theme resolver and the global accessor.
pub mod engine;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [metrics::ThemeMetrics] struct.
pub mod metrics;
/// Widget states consumed by the drawing operations.
pub mod state;
/// Contains the [theme::Theme] trait and built-in themes.
pub mod theme;
/// Contains the [variant::ThemeVariant] enum.
pub mod variant;

pub use engine::{current, current_variant, init, init_with, is_resolved, try_current};
pub use error::{ThemeError, ThemeResult};
pub use theme::Theme;
pub use variant::ThemeVariant;

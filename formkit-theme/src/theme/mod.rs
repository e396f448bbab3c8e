//! # Theme System
//!
//! This module defines the [Theme] trait, the drawing contract every rendering
//! backend of formkit implements, together with the built-in implementations:
//!
//! - **[win32::Win32ClassicTheme]**: classic gray 3D bevels (the default)
//! - **[gtk::GtkTheme]**: flat Gtk-like controls with thin rounded outlines
//! - **[nice::NiceTheme]**: soft blue-gray gradients
//! - **[clearlooks::ClearlooksTheme]**: Clearlooks gradients and rounded corners
//! - **[visual_styles::VisualStylesTheme]**: modern styled controls
//!
//! Widgets never name a concrete theme. They paint through the active theme
//! returned by [current](crate::engine::current):
//!
//! ```rust
//! use formkit_theme::state::ButtonState;
//! use vello::kurbo::Rect;
//! use vello::Scene;
//!
//! let mut scene = Scene::new();
//! let theme = formkit_theme::current();
//! theme.draw_button(&mut scene, Rect::new(0.0, 0.0, 75.0, 23.0), ButtonState::Normal);
//! ```
//!
//! ## Implementing a Theme
//!
//! A theme owns a [ColorTable] and a [ThemeMetrics] and implements the drawing
//! operations. Adding one means adding a [ThemeVariant] value as well; themes
//! are not registered at runtime.

use std::any::Any;

use vello::kurbo::Rect;
use vello::peniko::Color;
use vello::Scene;

use crate::colors::{ColorTable, SystemColor};
use crate::metrics::ThemeMetrics;
use crate::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
use crate::variant::ThemeVariant;

/// The Clearlooks Theme.
pub mod clearlooks;
/// The Gtk Theme.
pub mod gtk;
/// The Nice Theme.
pub mod nice;
/// Shared painting primitives.
pub mod paint;
/// The Visual Styles Theme.
pub mod visual_styles;
/// The Win32 Classic Theme.
pub mod win32;

/// The rendering strategy used by every widget-drawing call.
///
/// Implementations are shared read-only across threads once published, hence
/// the `Send + Sync` bound.
pub trait Theme: Send + Sync {
    /// The variant this theme implements.
    fn variant(&self) -> ThemeVariant;

    /// Human readable name.
    fn name(&self) -> &'static str;

    /// The system colors of this theme.
    fn colors(&self) -> &ColorTable;

    /// Size metrics of this theme.
    fn metrics(&self) -> &ThemeMetrics;

    /// Look up a system color, falling back to [SystemColor::fallback].
    fn color(&self, key: SystemColor) -> Color {
        self.colors().get(key).unwrap_or_else(|| key.fallback())
    }

    /// Background of a form's client area.
    fn default_window_background(&self) -> Color {
        self.color(SystemColor::Window)
    }

    /// Paint a push button face and border.
    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState);

    /// Paint a check box glyph.
    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState);

    /// Paint a scroll bar arrow button.
    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState);

    /// Paint a control border just inside `rect`.
    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle);

    /// Paint a progress bar filled to `fraction`, clamped to `0.0..=1.0`.
    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64);

    /// Paint the keyboard focus indicator as a dotted outline.
    fn draw_focus_rect(&self, scene: &mut Scene, rect: Rect) {
        let width = self.metrics().focus_width;
        paint::stroke_with(
            scene,
            &paint::shrink(rect, width / 2.0),
            self.color(SystemColor::Highlight),
            &paint::dotted(width),
        );
    }

    /// Get a reference to this theme as Any for downcasting.
    fn as_any(&self) -> &dyn Any;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn painted(draw: impl FnOnce(&mut Scene)) -> bool {
        let mut scene = Scene::new();
        draw(&mut scene);
        !scene.encoding().is_empty()
    }

    #[test]
    fn every_theme_paints_every_control() {
        let rect = Rect::new(0.0, 0.0, 80.0, 24.0);
        for variant in ThemeVariant::ALL {
            let theme = variant.instantiate();
            assert!(painted(|s| theme.draw_button(s, rect, ButtonState::Pressed)), "{variant}");
            assert!(
                painted(|s| theme.draw_check_box(s, rect, CheckState::Checked, ButtonState::Normal)),
                "{variant}"
            );
            assert!(
                painted(|s| theme.draw_scroll_button(s, rect, ScrollArrow::Left, ButtonState::Hot)),
                "{variant}"
            );
            assert!(painted(|s| theme.draw_border(s, rect, BorderStyle::Sunken)), "{variant}");
            assert!(painted(|s| theme.draw_progress_bar(s, rect, 0.5)), "{variant}");
            assert!(painted(|s| theme.draw_focus_rect(s, rect)), "{variant}");
        }
    }

    #[test]
    fn no_border_paints_nothing() {
        let rect = Rect::new(0.0, 0.0, 80.0, 24.0);
        for variant in ThemeVariant::ALL {
            let theme = variant.instantiate();
            assert!(!painted(|s| theme.draw_border(s, rect, BorderStyle::None)), "{variant}");
        }
    }

    #[test]
    fn every_theme_defines_the_full_color_table() {
        for variant in ThemeVariant::ALL {
            let theme = variant.instantiate();
            for key in SystemColor::ALL {
                assert!(theme.colors().contains(key), "{variant} lacks {key:?}");
            }
        }
    }

    #[test]
    fn window_background_is_the_window_color() {
        for variant in ThemeVariant::ALL {
            let theme = variant.instantiate();
            assert_eq!(
                theme.default_window_background(),
                theme.color(SystemColor::Window),
                "{variant}"
            );
        }
    }

    #[test]
    fn downcast_matches_variant() {
        let theme = ThemeVariant::Clearlooks.instantiate();
        assert!(theme
            .as_any()
            .downcast_ref::<clearlooks::ClearlooksTheme>()
            .is_some());
        assert!(theme.as_any().downcast_ref::<win32::Win32ClassicTheme>().is_none());
    }
}

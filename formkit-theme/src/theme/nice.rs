use std::any::Any;

use vello::kurbo::{Rect, RoundedRect};
use vello::peniko::Color;
use vello::Scene;

use crate::colors::{ColorTable, SystemColor};
use crate::metrics::ThemeMetrics;
use crate::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
use crate::theme::paint::{self, bevel, shade, shrink};
use crate::theme::Theme;
use crate::variant::ThemeVariant;

/// Soft blue-gray look built from vertical gradients.
#[derive(Debug, Clone)]
pub struct NiceTheme {
    colors: ColorTable,
    metrics: ThemeMetrics,
}

impl NiceTheme {
    /// Create the Nice theme.
    pub fn new() -> Self {
        Self {
            colors: ColorTable::new()
                .with(SystemColor::Control, Color::from_rgb8(214, 219, 233))
                .with(SystemColor::ControlDark, Color::from_rgb8(127, 157, 185))
                .with(SystemColor::ControlDarkDark, Color::from_rgb8(49, 106, 197))
                .with(SystemColor::ControlLight, Color::from_rgb8(236, 239, 247))
                .with(SystemColor::ControlLightLight, Color::WHITE)
                .with(SystemColor::ControlText, Color::from_rgb8(0, 0, 0))
                .with(SystemColor::GrayText, Color::from_rgb8(161, 161, 146))
                .with(SystemColor::Highlight, Color::from_rgb8(49, 106, 197))
                .with(SystemColor::HighlightText, Color::WHITE)
                .with(SystemColor::HotTrack, Color::from_rgb8(255, 200, 60))
                .with(SystemColor::Window, Color::WHITE)
                .with(SystemColor::WindowText, Color::BLACK)
                .with(SystemColor::WindowFrame, Color::from_rgb8(0, 60, 116))
                .with(SystemColor::ScrollBar, Color::from_rgb8(236, 239, 247))
                .with(SystemColor::ActiveCaption, Color::from_rgb8(0, 84, 227))
                .with(SystemColor::InactiveCaption, Color::from_rgb8(122, 150, 223))
                .with(SystemColor::Menu, Color::from_rgb8(246, 246, 246))
                .with(SystemColor::MenuText, Color::BLACK),
            metrics: ThemeMetrics::rounded(2.0),
        }
    }

    fn gradient(&self, state: ButtonState) -> (Color, Color) {
        let light = self.color(SystemColor::ControlLightLight);
        let face = self.color(SystemColor::Control);
        match state {
            ButtonState::Pressed => (face, light),
            ButtonState::Hot => (light, shade(face, 1.04)),
            ButtonState::Disabled => (self.color(SystemColor::ControlLight), self.color(SystemColor::ControlLight)),
            ButtonState::Normal | ButtonState::Default => (light, face),
        }
    }

    fn shape(&self, rect: Rect) -> RoundedRect {
        shrink(rect, 0.5).to_rounded_rect(self.metrics.corner_radius)
    }

    fn border_color(&self, state: ButtonState) -> Color {
        match state {
            ButtonState::Hot => self.color(SystemColor::HotTrack),
            ButtonState::Default => self.color(SystemColor::ControlDarkDark),
            ButtonState::Disabled => self.color(SystemColor::GrayText),
            _ => self.color(SystemColor::ControlDark),
        }
    }
}

impl Default for NiceTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for NiceTheme {
    fn variant(&self) -> ThemeVariant {
        ThemeVariant::Nice
    }

    fn name(&self) -> &'static str {
        "Nice"
    }

    fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        let shape = self.shape(rect);
        let (top, bottom) = self.gradient(state);
        paint::fill_vertical_gradient(scene, rect, &shape, top, bottom);
        paint::stroke(scene, &shape, self.border_color(state), 1.0);
    }

    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState) {
        let shape = self.shape(rect);
        let (top, bottom) = self.gradient(state);
        paint::fill_vertical_gradient(scene, rect, &shape, bottom, top);
        paint::stroke(scene, &shape, self.border_color(state), 1.0);

        let mark = match (check, state.is_disabled()) {
            (CheckState::Unchecked, _) => return,
            (_, true) | (CheckState::Indeterminate, _) => self.color(SystemColor::GrayText),
            (CheckState::Checked, false) => self.color(SystemColor::Highlight),
        };
        paint::stroke(scene, &paint::check_mark_path(rect), mark, 2.0);
    }

    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState) {
        self.draw_button(scene, rect, state);
        let glyph = if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            self.color(SystemColor::ControlDarkDark)
        };
        paint::fill(scene, &paint::arrow_path(rect, arrow), glyph);
    }

    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle) {
        match style {
            BorderStyle::None => {},
            BorderStyle::Flat | BorderStyle::Sunken => {
                paint::stroke_inside(scene, rect, self.color(SystemColor::ControlDark), self.metrics.border_size)
            },
            BorderStyle::Raised => bevel(
                scene,
                rect,
                self.color(SystemColor::ControlLightLight),
                self.color(SystemColor::ControlDark),
            ),
        }
    }

    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64) {
        let trough = self.shape(rect);
        paint::fill(scene, &trough, self.color(SystemColor::Window));
        paint::stroke(scene, &trough, self.color(SystemColor::ControlDark), 1.0);

        let bar = paint::progress_fill(shrink(rect, 2.0), fraction);
        if bar.width() > 0.0 {
            let highlight = self.color(SystemColor::Highlight);
            paint::fill_vertical_gradient(scene, bar, &bar, shade(highlight, 1.4), highlight);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

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

/// Flat Gtk-like controls with thin rounded outlines.
#[derive(Debug, Clone)]
pub struct GtkTheme {
    colors: ColorTable,
    metrics: ThemeMetrics,
}

impl GtkTheme {
    /// Create the Gtk theme.
    pub fn new() -> Self {
        Self {
            colors: ColorTable::new()
                .with(SystemColor::Control, Color::from_rgb8(220, 218, 213))
                .with(SystemColor::ControlDark, Color::from_rgb8(157, 154, 145))
                .with(SystemColor::ControlDarkDark, Color::from_rgb8(85, 83, 78))
                .with(SystemColor::ControlLight, Color::from_rgb8(238, 237, 234))
                .with(SystemColor::ControlLightLight, Color::WHITE)
                .with(SystemColor::ControlText, Color::BLACK)
                .with(SystemColor::GrayText, Color::from_rgb8(157, 154, 145))
                .with(SystemColor::Highlight, Color::from_rgb8(75, 105, 131))
                .with(SystemColor::HighlightText, Color::WHITE)
                .with(SystemColor::HotTrack, Color::from_rgb8(238, 237, 234))
                .with(SystemColor::Window, Color::WHITE)
                .with(SystemColor::WindowText, Color::BLACK)
                .with(SystemColor::WindowFrame, Color::from_rgb8(85, 83, 78))
                .with(SystemColor::ScrollBar, Color::from_rgb8(195, 193, 189))
                .with(SystemColor::ActiveCaption, Color::from_rgb8(75, 105, 131))
                .with(SystemColor::InactiveCaption, Color::from_rgb8(157, 154, 145))
                .with(SystemColor::Menu, Color::from_rgb8(238, 237, 234))
                .with(SystemColor::MenuText, Color::BLACK),
            metrics: ThemeMetrics::rounded(2.0),
        }
    }

    fn face(&self, state: ButtonState) -> Color {
        let base = self.color(SystemColor::Control);
        match state {
            ButtonState::Hot => self.color(SystemColor::HotTrack),
            ButtonState::Pressed => shade(base, 0.85),
            ButtonState::Disabled => self.color(SystemColor::ControlLight),
            ButtonState::Normal | ButtonState::Default => base,
        }
    }

    fn outline(&self, rect: Rect) -> RoundedRect {
        shrink(rect, 0.5).to_rounded_rect(self.metrics.corner_radius)
    }

    fn text(&self, state: ButtonState) -> Color {
        if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            self.color(SystemColor::ControlText)
        }
    }
}

impl Default for GtkTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for GtkTheme {
    fn variant(&self) -> ThemeVariant {
        ThemeVariant::Gtk
    }

    fn name(&self) -> &'static str {
        "Gtk"
    }

    fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        let shape = self.outline(rect);
        paint::fill(scene, &shape, self.face(state));
        let border = if matches!(state, ButtonState::Default) {
            self.color(SystemColor::WindowFrame)
        } else {
            self.color(SystemColor::ControlDark)
        };
        paint::stroke(scene, &shape, border, 1.0);
    }

    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState) {
        let shape = self.outline(rect);
        let fill = match state {
            ButtonState::Pressed => self.color(SystemColor::Control),
            ButtonState::Disabled => self.color(SystemColor::ControlLight),
            _ => self.color(SystemColor::Window),
        };
        paint::fill(scene, &shape, fill);
        paint::stroke(scene, &shape, self.color(SystemColor::ControlDark), 1.0);

        match check {
            CheckState::Unchecked => {},
            CheckState::Checked => {
                paint::stroke(scene, &paint::check_mark_path(rect), self.text(state), 2.0);
            },
            CheckState::Indeterminate => {
                let bar = Rect::new(rect.x0 + 3.0, rect.center().y - 1.0, rect.x1 - 3.0, rect.center().y + 1.0);
                paint::fill(scene, &bar, self.text(state));
            },
        }
    }

    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState) {
        self.draw_button(scene, rect, state);
        paint::fill(scene, &paint::arrow_path(rect, arrow), self.text(state));
    }

    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle) {
        match style {
            BorderStyle::None => {},
            BorderStyle::Flat => paint::stroke(scene, &self.outline(rect), self.color(SystemColor::ControlDark), 1.0),
            BorderStyle::Raised => bevel(
                scene,
                rect,
                self.color(SystemColor::ControlLightLight),
                self.color(SystemColor::ControlDark),
            ),
            BorderStyle::Sunken => bevel(
                scene,
                rect,
                self.color(SystemColor::ControlDark),
                self.color(SystemColor::ControlLightLight),
            ),
        }
    }

    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64) {
        let trough = self.outline(rect);
        paint::fill(scene, &trough, self.color(SystemColor::ScrollBar));
        paint::stroke(scene, &trough, self.color(SystemColor::ControlDark), 1.0);

        let bar = paint::progress_fill(shrink(rect, 1.0), fraction);
        if bar.width() > 0.0 {
            let bar = bar.to_rounded_rect(self.metrics.corner_radius);
            paint::fill(scene, &bar, self.color(SystemColor::Highlight));
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

use std::any::Any;

use vello::kurbo::{Line, Rect, RoundedRect};
use vello::peniko::Color;
use vello::Scene;

use crate::colors::{ColorTable, SystemColor};
use crate::metrics::ThemeMetrics;
use crate::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
use crate::theme::paint::{self, shade, shrink};
use crate::theme::Theme;
use crate::variant::ThemeVariant;

/// Clearlooks look: rounded controls, subtle gradients and an inner highlight.
#[derive(Debug, Clone)]
pub struct ClearlooksTheme {
    colors: ColorTable,
    metrics: ThemeMetrics,
}

impl ClearlooksTheme {
    /// Create the Clearlooks theme.
    pub fn new() -> Self {
        Self {
            colors: ColorTable::new()
                .with(SystemColor::Control, Color::from_rgb8(239, 235, 231))
                .with(SystemColor::ControlDark, Color::from_rgb8(159, 149, 140))
                .with(SystemColor::ControlDarkDark, Color::from_rgb8(102, 91, 81))
                .with(SystemColor::ControlLight, Color::from_rgb8(248, 246, 244))
                .with(SystemColor::ControlLightLight, Color::WHITE)
                .with(SystemColor::ControlText, Color::from_rgb8(16, 16, 16))
                .with(SystemColor::GrayText, Color::from_rgb8(159, 149, 140))
                .with(SystemColor::Highlight, Color::from_rgb8(115, 149, 194))
                .with(SystemColor::HighlightText, Color::WHITE)
                .with(SystemColor::HotTrack, Color::from_rgb8(247, 245, 243))
                .with(SystemColor::Window, Color::WHITE)
                .with(SystemColor::WindowText, Color::from_rgb8(16, 16, 16))
                .with(SystemColor::WindowFrame, Color::from_rgb8(102, 91, 81))
                .with(SystemColor::ScrollBar, Color::from_rgb8(222, 215, 209))
                .with(SystemColor::ActiveCaption, Color::from_rgb8(115, 149, 194))
                .with(SystemColor::InactiveCaption, Color::from_rgb8(200, 192, 186))
                .with(SystemColor::Menu, Color::from_rgb8(248, 246, 244))
                .with(SystemColor::MenuText, Color::from_rgb8(16, 16, 16)),
            metrics: ThemeMetrics::rounded(3.0),
        }
    }

    fn shape(&self, rect: Rect) -> RoundedRect {
        shrink(rect, 0.5).to_rounded_rect(self.metrics.corner_radius)
    }

    fn face(&self, state: ButtonState) -> (Color, Color) {
        let base = match state {
            ButtonState::Hot => self.color(SystemColor::HotTrack),
            ButtonState::Disabled => self.color(SystemColor::ControlLight),
            _ => self.color(SystemColor::Control),
        };
        if state.is_pressed() {
            (shade(base, 0.86), shade(base, 0.94))
        } else {
            (shade(base, 1.03), shade(base, 0.93))
        }
    }

    fn frame(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        let shape = self.shape(rect);
        let (top, bottom) = self.face(state);
        paint::fill_vertical_gradient(scene, rect, &shape, top, bottom);

        if !state.is_pressed() && !state.is_disabled() {
            let inner = shrink(rect, 1.5);
            paint::stroke(
                scene,
                &Line::new((inner.x0 + 1.0, inner.y0), (inner.x1 - 1.0, inner.y0)),
                self.color(SystemColor::ControlLightLight),
                1.0,
            );
        }

        let border = match state {
            ButtonState::Disabled => self.color(SystemColor::ControlDark),
            ButtonState::Default => self.color(SystemColor::Highlight),
            _ => self.color(SystemColor::ControlDarkDark),
        };
        paint::stroke(scene, &shape, border, 1.0);
    }
}

impl Default for ClearlooksTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for ClearlooksTheme {
    fn variant(&self) -> ThemeVariant {
        ThemeVariant::Clearlooks
    }

    fn name(&self) -> &'static str {
        "Clearlooks"
    }

    fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        self.frame(scene, rect, state);
    }

    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState) {
        let shape = shrink(rect, 0.5).to_rounded_rect(2.0);
        let fill = if check == CheckState::Unchecked || state.is_disabled() {
            self.color(SystemColor::Window)
        } else {
            self.color(SystemColor::Highlight)
        };
        paint::fill(scene, &shape, fill);
        paint::stroke(scene, &shape, self.color(SystemColor::ControlDarkDark), 1.0);

        let mark = if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            self.color(SystemColor::HighlightText)
        };
        match check {
            CheckState::Unchecked => {},
            CheckState::Checked => paint::stroke(scene, &paint::check_mark_path(rect), mark, 2.0),
            CheckState::Indeterminate => {
                let y = rect.center().y;
                paint::stroke(scene, &Line::new((rect.x0 + 3.0, y), (rect.x1 - 3.0, y)), mark, 2.0);
            },
        }
    }

    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState) {
        self.frame(scene, rect, state);
        let glyph = if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            self.color(SystemColor::ControlText)
        };
        paint::fill(scene, &paint::arrow_path(rect, arrow), glyph);
    }

    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle) {
        let color = match style {
            BorderStyle::None => return,
            BorderStyle::Flat => self.color(SystemColor::ControlDark),
            BorderStyle::Raised => self.color(SystemColor::ControlLightLight),
            BorderStyle::Sunken => self.color(SystemColor::ControlDarkDark),
        };
        paint::stroke(scene, &self.shape(rect), color, self.metrics.border_size);
    }

    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64) {
        let trough = self.shape(rect);
        paint::fill(scene, &trough, self.color(SystemColor::ScrollBar));
        paint::stroke(scene, &trough, self.color(SystemColor::ControlDark), 1.0);

        let bar = paint::progress_fill(shrink(rect, 1.0), fraction);
        if bar.width() > 0.0 {
            let highlight = self.color(SystemColor::Highlight);
            let shape = bar.to_rounded_rect(self.metrics.corner_radius - 1.0);
            paint::fill_vertical_gradient(scene, bar, &shape, shade(highlight, 1.15), shade(highlight, 0.9));
            paint::stroke(scene, &shape, shade(highlight, 0.7), 1.0);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

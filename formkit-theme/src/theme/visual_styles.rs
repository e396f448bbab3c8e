use std::any::Any;

use vello::kurbo::{Rect, RoundedRect};
use vello::peniko::Color;
use vello::Scene;

use crate::colors::{ColorTable, SystemColor};
use crate::metrics::ThemeMetrics;
use crate::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
use crate::theme::paint::{self, shade, shrink};
use crate::theme::Theme;
use crate::variant::ThemeVariant;

/// Modern styled controls with two-tone glassy faces.
///
/// Only selected when visual styles are available to the application, see
/// [application](crate::application).
#[derive(Debug, Clone)]
pub struct VisualStylesTheme {
    colors: ColorTable,
    metrics: ThemeMetrics,
}

impl VisualStylesTheme {
    /// Create the visual styles theme.
    pub fn new() -> Self {
        Self {
            colors: ColorTable::new()
                .with(SystemColor::Control, Color::from_rgb8(240, 240, 240))
                .with(SystemColor::ControlDark, Color::from_rgb8(160, 160, 160))
                .with(SystemColor::ControlDarkDark, Color::from_rgb8(105, 105, 105))
                .with(SystemColor::ControlLight, Color::from_rgb8(227, 227, 227))
                .with(SystemColor::ControlLightLight, Color::WHITE)
                .with(SystemColor::ControlText, Color::BLACK)
                .with(SystemColor::GrayText, Color::from_rgb8(109, 109, 109))
                .with(SystemColor::Highlight, Color::from_rgb8(51, 153, 255))
                .with(SystemColor::HighlightText, Color::WHITE)
                .with(SystemColor::HotTrack, Color::from_rgb8(0, 102, 204))
                .with(SystemColor::Window, Color::WHITE)
                .with(SystemColor::WindowText, Color::BLACK)
                .with(SystemColor::WindowFrame, Color::from_rgb8(100, 100, 100))
                .with(SystemColor::ScrollBar, Color::from_rgb8(200, 200, 200))
                .with(SystemColor::ActiveCaption, Color::from_rgb8(153, 180, 209))
                .with(SystemColor::InactiveCaption, Color::from_rgb8(191, 205, 219))
                .with(SystemColor::Menu, Color::from_rgb8(240, 240, 240))
                .with(SystemColor::MenuText, Color::BLACK),
            metrics: ThemeMetrics::modern(),
        }
    }

    fn shape(&self, rect: Rect) -> RoundedRect {
        shrink(rect, 0.5).to_rounded_rect(self.metrics.corner_radius)
    }

    // Upper and lower half colors of a control face.
    fn halves(&self, state: ButtonState) -> (Color, Color) {
        match state {
            ButtonState::Hot => (Color::from_rgb8(234, 246, 253), Color::from_rgb8(190, 230, 253)),
            ButtonState::Pressed => (Color::from_rgb8(229, 244, 252), Color::from_rgb8(152, 209, 239)),
            ButtonState::Disabled => (self.color(SystemColor::Control), self.color(SystemColor::Control)),
            ButtonState::Normal | ButtonState::Default => {
                (Color::from_rgb8(242, 242, 242), Color::from_rgb8(221, 221, 221))
            },
        }
    }

    fn border(&self, state: ButtonState) -> Color {
        match state {
            ButtonState::Hot | ButtonState::Default => Color::from_rgb8(60, 127, 177),
            ButtonState::Pressed => Color::from_rgb8(44, 98, 139),
            ButtonState::Disabled => Color::from_rgb8(173, 178, 181),
            ButtonState::Normal => Color::from_rgb8(112, 112, 112),
        }
    }

    fn face(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        let shape = self.shape(rect);
        let (upper, lower) = self.halves(state);
        paint::fill(scene, &shape, lower);
        let top_half = Rect::new(rect.x0 + 1.0, rect.y0 + 1.0, rect.x1 - 1.0, rect.center().y);
        paint::fill(scene, &top_half, upper);
        paint::stroke(scene, &shape, self.border(state), 1.0);
    }
}

impl Default for VisualStylesTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for VisualStylesTheme {
    fn variant(&self) -> ThemeVariant {
        ThemeVariant::VisualStyles
    }

    fn name(&self) -> &'static str {
        "Visual Styles"
    }

    fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        self.face(scene, rect, state);
    }

    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState) {
        let outer = shrink(rect, 0.5);
        paint::fill(scene, &outer, self.color(SystemColor::Window));
        paint::stroke(scene, &outer, self.border(state), 1.0);
        let (upper, lower) = self.halves(state);
        paint::fill_vertical_gradient(scene, rect, &shrink(rect, 2.5), lower, upper);

        let mark = if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            Color::from_rgb8(33, 33, 33)
        };
        match check {
            CheckState::Unchecked => {},
            CheckState::Checked => paint::stroke(scene, &paint::check_mark_path(rect), mark, 1.5),
            CheckState::Indeterminate => paint::fill(scene, &shrink(rect, 4.0), self.color(SystemColor::Highlight)),
        }
    }

    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState) {
        if matches!(state, ButtonState::Normal | ButtonState::Default) {
            paint::fill(scene, &rect, self.color(SystemColor::ScrollBar));
        } else {
            self.face(scene, rect, state);
        }
        let glyph = if state.is_disabled() {
            self.color(SystemColor::ControlDark)
        } else {
            shade(self.color(SystemColor::ControlDarkDark), 0.8)
        };
        paint::fill(scene, &paint::arrow_path(rect, arrow), glyph);
    }

    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle) {
        let color = match style {
            BorderStyle::None => return,
            BorderStyle::Flat => self.color(SystemColor::WindowFrame),
            BorderStyle::Raised | BorderStyle::Sunken => Color::from_rgb8(130, 135, 144),
        };
        paint::stroke_inside(scene, rect, color, self.metrics.border_size);
    }

    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64) {
        let trough = self.shape(rect);
        paint::fill_vertical_gradient(
            scene,
            rect,
            &trough,
            Color::from_rgb8(243, 243, 243),
            Color::from_rgb8(218, 218, 218),
        );
        paint::stroke(scene, &trough, Color::from_rgb8(188, 188, 188), 1.0);

        let bar = paint::progress_fill(shrink(rect, 1.0), fraction);
        if bar.width() > 0.0 {
            let green = Color::from_rgb8(6, 176, 37);
            paint::fill_vertical_gradient(scene, bar, &bar, shade(green, 1.3), green);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

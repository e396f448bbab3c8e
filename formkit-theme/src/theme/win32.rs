use std::any::Any;

use vello::kurbo::{Rect, Vec2};
use vello::peniko::Color;
use vello::Scene;

use crate::colors::{ColorTable, SystemColor};
use crate::metrics::ThemeMetrics;
use crate::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
use crate::theme::paint::{self, bevel, shrink};
use crate::theme::Theme;
use crate::variant::ThemeVariant;

/// Classic gray 3D appearance. The fallback for every unknown or unavailable selector.
#[derive(Debug, Clone)]
pub struct Win32ClassicTheme {
    colors: ColorTable,
    metrics: ThemeMetrics,
}

impl Win32ClassicTheme {
    /// Create the classic theme.
    pub fn new() -> Self {
        Self {
            colors: Self::color_table(),
            metrics: ThemeMetrics::classic(),
        }
    }

    fn color_table() -> ColorTable {
        ColorTable::new()
            .with(SystemColor::Control, Color::from_rgb8(212, 208, 200))
            .with(SystemColor::ControlDark, Color::from_rgb8(128, 128, 128))
            .with(SystemColor::ControlDarkDark, Color::from_rgb8(64, 64, 64))
            .with(SystemColor::ControlLight, Color::from_rgb8(212, 208, 200))
            .with(SystemColor::ControlLightLight, Color::WHITE)
            .with(SystemColor::ControlText, Color::BLACK)
            .with(SystemColor::GrayText, Color::from_rgb8(128, 128, 128))
            .with(SystemColor::Highlight, Color::from_rgb8(10, 36, 106))
            .with(SystemColor::HighlightText, Color::WHITE)
            .with(SystemColor::HotTrack, Color::from_rgb8(0, 0, 128))
            .with(SystemColor::Window, Color::WHITE)
            .with(SystemColor::WindowText, Color::BLACK)
            .with(SystemColor::WindowFrame, Color::BLACK)
            .with(SystemColor::ScrollBar, Color::from_rgb8(212, 208, 200))
            .with(SystemColor::ActiveCaption, Color::from_rgb8(10, 36, 106))
            .with(SystemColor::InactiveCaption, Color::from_rgb8(128, 128, 128))
            .with(SystemColor::Menu, Color::from_rgb8(212, 208, 200))
            .with(SystemColor::MenuText, Color::BLACK)
    }

    fn raised(&self, scene: &mut Scene, rect: Rect) {
        bevel(
            scene,
            rect,
            self.color(SystemColor::ControlLightLight),
            self.color(SystemColor::ControlDarkDark),
        );
        bevel(
            scene,
            shrink(rect, 1.0),
            self.color(SystemColor::ControlLight),
            self.color(SystemColor::ControlDark),
        );
    }

    fn sunken(&self, scene: &mut Scene, rect: Rect) {
        bevel(
            scene,
            rect,
            self.color(SystemColor::ControlDark),
            self.color(SystemColor::ControlLightLight),
        );
        bevel(
            scene,
            shrink(rect, 1.0),
            self.color(SystemColor::ControlDarkDark),
            self.color(SystemColor::ControlLight),
        );
    }

    fn pushed(&self, scene: &mut Scene, rect: Rect) {
        paint::stroke_inside(scene, rect, self.color(SystemColor::WindowFrame), 1.0);
        paint::stroke_inside(scene, shrink(rect, 1.0), self.color(SystemColor::ControlDark), 1.0);
    }

    fn glyph_color(&self, state: ButtonState) -> Color {
        if state.is_disabled() {
            self.color(SystemColor::GrayText)
        } else {
            self.color(SystemColor::ControlText)
        }
    }
}

impl Default for Win32ClassicTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl Theme for Win32ClassicTheme {
    fn variant(&self) -> ThemeVariant {
        ThemeVariant::Win32Classic
    }

    fn name(&self) -> &'static str {
        "Win32 Classic"
    }

    fn colors(&self) -> &ColorTable {
        &self.colors
    }

    fn metrics(&self) -> &ThemeMetrics {
        &self.metrics
    }

    fn draw_button(&self, scene: &mut Scene, rect: Rect, state: ButtonState) {
        paint::fill(scene, &rect, self.color(SystemColor::Control));
        match state {
            ButtonState::Pressed => self.pushed(scene, rect),
            ButtonState::Default => {
                paint::stroke_inside(scene, rect, self.color(SystemColor::WindowFrame), 1.0);
                self.raised(scene, shrink(rect, 1.0));
            },
            _ => self.raised(scene, rect),
        }
    }

    fn draw_check_box(&self, scene: &mut Scene, rect: Rect, check: CheckState, state: ButtonState) {
        let face = if state.is_pressed() || state.is_disabled() {
            self.color(SystemColor::Control)
        } else {
            self.color(SystemColor::Window)
        };
        paint::fill(scene, &shrink(rect, 2.0), face);
        self.sunken(scene, rect);

        let mark = match check {
            CheckState::Unchecked => return,
            CheckState::Checked => self.glyph_color(state),
            CheckState::Indeterminate => self.color(SystemColor::GrayText),
        };
        paint::stroke(scene, &paint::check_mark_path(shrink(rect, 2.0)), mark, 2.0);
    }

    fn draw_scroll_button(&self, scene: &mut Scene, rect: Rect, arrow: ScrollArrow, state: ButtonState) {
        paint::fill(scene, &rect, self.color(SystemColor::Control));
        let glyph_area = if state.is_pressed() {
            paint::stroke_inside(scene, rect, self.color(SystemColor::ControlDark), 1.0);
            rect + Vec2::new(1.0, 1.0)
        } else {
            self.raised(scene, rect);
            rect
        };
        if state.is_disabled() {
            let offset = glyph_area + Vec2::new(1.0, 1.0);
            paint::fill(
                scene,
                &paint::arrow_path(offset, arrow),
                self.color(SystemColor::ControlLightLight),
            );
        }
        paint::fill(scene, &paint::arrow_path(glyph_area, arrow), self.glyph_color(state));
    }

    fn draw_border(&self, scene: &mut Scene, rect: Rect, style: BorderStyle) {
        match style {
            BorderStyle::None => {},
            BorderStyle::Flat => paint::stroke_inside(
                scene,
                rect,
                self.color(SystemColor::WindowFrame),
                self.metrics.border_size,
            ),
            BorderStyle::Raised => self.raised(scene, rect),
            BorderStyle::Sunken => self.sunken(scene, rect),
        }
    }

    fn draw_progress_bar(&self, scene: &mut Scene, rect: Rect, fraction: f64) {
        paint::fill(scene, &rect, self.color(SystemColor::Control));
        bevel(
            scene,
            rect,
            self.color(SystemColor::ControlDark),
            self.color(SystemColor::ControlLightLight),
        );

        let client = shrink(rect, 2.0);
        let filled = paint::progress_fill(client, fraction);
        let block = (client.height() * 2.0 / 3.0).max(2.0);
        let highlight = self.color(SystemColor::Highlight);
        let mut x = filled.x0;
        while x < filled.x1 {
            let end = (x + block).min(filled.x1);
            paint::fill(scene, &Rect::new(x, client.y0, end, client.y1), highlight);
            x += block + 2.0;
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

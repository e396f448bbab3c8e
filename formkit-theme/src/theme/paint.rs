//! Shared painting primitives used by the built-in themes.

use vello::kurbo::{Affine, BezPath, Line, Point, Rect, Shape, Stroke};
use vello::peniko::{Color, Fill, Gradient};
use vello::Scene;

use crate::state::ScrollArrow;

/// Shrink a rectangle by `amount` on every side, never past its center.
pub fn shrink(rect: Rect, amount: f64) -> Rect {
    let dx = amount.min(rect.width() / 2.0);
    let dy = amount.min(rect.height() / 2.0);
    Rect::new(rect.x0 + dx, rect.y0 + dy, rect.x1 - dx, rect.y1 - dy)
}

/// Scale the RGB channels of a color, keeping alpha. Factors above one lighten.
pub fn shade(color: Color, factor: f32) -> Color {
    let rgba = color.to_rgba8();
    let scale = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
    Color::from_rgba8(scale(rgba.r), scale(rgba.g), scale(rgba.b), rgba.a)
}

/// Fill any shape with a solid color.
pub fn fill(scene: &mut Scene, shape: &impl Shape, color: Color) {
    scene.fill(Fill::NonZero, Affine::IDENTITY, color, None, shape);
}

/// Fill a shape with a top-to-bottom gradient spanning `rect`.
pub fn fill_vertical_gradient(
    scene: &mut Scene,
    rect: Rect,
    shape: &impl Shape,
    top: Color,
    bottom: Color,
) {
    let gradient = Gradient::new_linear((rect.x0, rect.y0), (rect.x0, rect.y1)).with_stops([top, bottom]);
    scene.fill(Fill::NonZero, Affine::IDENTITY, &gradient, None, shape);
}

/// Stroke the outline of a shape.
pub fn stroke(scene: &mut Scene, shape: &impl Shape, color: Color, width: f64) {
    scene.stroke(&Stroke::new(width), Affine::IDENTITY, color, None, shape);
}

/// Stroke the outline of a shape with an explicit stroke style.
pub fn stroke_with(scene: &mut Scene, shape: &impl Shape, color: Color, style: &Stroke) {
    scene.stroke(style, Affine::IDENTITY, color, None, shape);
}

/// A stroke alternating one `width`-long dash with an equal gap.
pub fn dotted(width: f64) -> Stroke {
    Stroke::new(width).with_dashes(0.0, [width, width])
}

/// Stroke a rectangle so that the line lies fully inside it.
pub fn stroke_inside(scene: &mut Scene, rect: Rect, color: Color, width: f64) {
    stroke(scene, &shrink(rect, width / 2.0), color, width);
}

/// Draw a one pixel 3D edge: `light` on the top and left, `dark` on the bottom and right.
pub fn bevel(scene: &mut Scene, rect: Rect, light: Color, dark: Color) {
    let r = shrink(rect, 0.5);
    stroke(scene, &Line::new((r.x0, r.y1), (r.x0, r.y0)), light, 1.0);
    stroke(scene, &Line::new((r.x0, r.y0), (r.x1, r.y0)), light, 1.0);
    stroke(scene, &Line::new((r.x1, r.y0), (r.x1, r.y1)), dark, 1.0);
    stroke(scene, &Line::new((r.x1, r.y1), (r.x0, r.y1)), dark, 1.0);
}

/// Build a filled triangle pointing in the arrow's direction, centered in `rect`.
pub fn arrow_path(rect: Rect, arrow: ScrollArrow) -> BezPath {
    let center = rect.center();
    let half = (rect.width().min(rect.height()) / 4.0).max(1.0);
    let (a, b, c) = match arrow {
        ScrollArrow::Up => (
            Point::new(center.x - half, center.y + half / 2.0),
            Point::new(center.x + half, center.y + half / 2.0),
            Point::new(center.x, center.y - half / 2.0),
        ),
        ScrollArrow::Down => (
            Point::new(center.x - half, center.y - half / 2.0),
            Point::new(center.x + half, center.y - half / 2.0),
            Point::new(center.x, center.y + half / 2.0),
        ),
        ScrollArrow::Left => (
            Point::new(center.x + half / 2.0, center.y - half),
            Point::new(center.x + half / 2.0, center.y + half),
            Point::new(center.x - half / 2.0, center.y),
        ),
        ScrollArrow::Right => (
            Point::new(center.x - half / 2.0, center.y - half),
            Point::new(center.x - half / 2.0, center.y + half),
            Point::new(center.x + half / 2.0, center.y),
        ),
    };
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(b);
    path.line_to(c);
    path.close_path();
    path
}

/// Build the check mark glyph for a check box of the given bounds.
pub fn check_mark_path(rect: Rect) -> BezPath {
    let inner = shrink(rect, rect.width().min(rect.height()) * 0.2);
    let mut path = BezPath::new();
    path.move_to((inner.x0, inner.y0 + inner.height() * 0.5));
    path.line_to((inner.x0 + inner.width() * 0.4, inner.y1));
    path.line_to((inner.x1, inner.y0));
    path
}

/// The filled part of a progress bar.
pub fn progress_fill(rect: Rect, fraction: f64) -> Rect {
    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    Rect::new(rect.x0, rect.y0, rect.x0 + rect.width() * fraction, rect.y1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_stops_at_center() {
        let rect = Rect::new(0.0, 0.0, 4.0, 10.0);
        assert_eq!(shrink(rect, 1.0), Rect::new(1.0, 1.0, 3.0, 9.0));
        assert_eq!(shrink(rect, 5.0), Rect::new(2.0, 5.0, 2.0, 5.0));
    }

    #[test]
    fn shade_clamps_channels() {
        let color = Color::from_rgb8(100, 200, 250);
        assert_eq!(shade(color, 2.0), Color::from_rgb8(200, 255, 255));
        assert_eq!(shade(color, 0.5), Color::from_rgb8(50, 100, 125));
    }

    #[test]
    fn dotted_alternates_dash_and_gap() {
        let style = dotted(1.5);
        assert_eq!(style.width, 1.5);
        assert_eq!(style.dash_offset, 0.0);
        assert_eq!(&style.dash_pattern[..], &[1.5, 1.5]);
    }

    #[test]
    fn progress_fill_clamps_fraction() {
        let rect = Rect::new(10.0, 0.0, 110.0, 20.0);
        assert_eq!(progress_fill(rect, 0.25).width(), 25.0);
        assert_eq!(progress_fill(rect, 3.0).width(), 100.0);
        assert_eq!(progress_fill(rect, -1.0).width(), 0.0);
        assert_eq!(progress_fill(rect, f64::NAN).width(), 0.0);
    }
}

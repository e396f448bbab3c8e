#![warn(missing_docs)]

//! Desktop widget toolkit with selectable rendering themes.

pub use vello::kurbo as geometry;
pub use vello::peniko as color;

pub use formkit_theme as theme;

/// A "prelude" for users of the formkit toolkit.
///
/// ```rust
/// use formkit::prelude::*;
///
/// let theme = current();
/// let _ = theme.color(SystemColor::Window);
/// ```
pub mod prelude {
    pub use crate::theme::application::enable_visual_styles;
    pub use crate::theme::colors::SystemColor;
    pub use crate::theme::metrics::ThemeMetrics;
    pub use crate::theme::state::{BorderStyle, ButtonState, CheckState, ScrollArrow};
    pub use crate::theme::{current, Theme, ThemeVariant};

    pub use vello::kurbo::Rect;
    pub use vello::peniko::Color;
    pub use vello::Scene;
}

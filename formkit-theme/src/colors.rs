//! # System Colors
//!
//! Every theme publishes a [ColorTable] mapping [SystemColor] keys to concrete
//! colors. Widgets ask the active theme for a key instead of hardcoding colors,
//! so switching themes changes the palette of the whole toolkit.
//!
//! ```rust
//! use formkit_theme::colors::{ColorTable, SystemColor};
//! use vello::peniko::Color;
//!
//! let table = ColorTable::new()
//!     .with(SystemColor::Control, Color::from_rgb8(212, 208, 200))
//!     .with(SystemColor::ControlText, Color::BLACK);
//!
//! assert_eq!(table.get(SystemColor::ControlText), Some(Color::BLACK));
//! assert_eq!(table.get(SystemColor::Highlight), None);
//! ```

use indexmap::IndexMap;
use vello::peniko::Color;

/// Named colors a theme provides to widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemColor {
    /// Face of buttons and other 3D controls.
    Control,
    /// Shadow of 3D controls.
    ControlDark,
    /// Dark shadow of 3D controls.
    ControlDarkDark,
    /// Light edge of 3D controls.
    ControlLight,
    /// Highlight edge of 3D controls.
    ControlLightLight,
    /// Text on 3D controls.
    ControlText,
    /// Text of disabled controls.
    GrayText,
    /// Background of selected items.
    Highlight,
    /// Text of selected items.
    HighlightText,
    /// Background of hot-tracked items.
    HotTrack,
    /// Client area background.
    Window,
    /// Client area text.
    WindowText,
    /// Window frame lines.
    WindowFrame,
    /// Scroll bar track.
    ScrollBar,
    /// Active window caption.
    ActiveCaption,
    /// Inactive window caption.
    InactiveCaption,
    /// Menu background.
    Menu,
    /// Menu text.
    MenuText,
}

impl SystemColor {
    /// Every system color key.
    pub const ALL: [SystemColor; 18] = [
        SystemColor::Control,
        SystemColor::ControlDark,
        SystemColor::ControlDarkDark,
        SystemColor::ControlLight,
        SystemColor::ControlLightLight,
        SystemColor::ControlText,
        SystemColor::GrayText,
        SystemColor::Highlight,
        SystemColor::HighlightText,
        SystemColor::HotTrack,
        SystemColor::Window,
        SystemColor::WindowText,
        SystemColor::WindowFrame,
        SystemColor::ScrollBar,
        SystemColor::ActiveCaption,
        SystemColor::InactiveCaption,
        SystemColor::Menu,
        SystemColor::MenuText,
    ];

    /// Color used when a theme does not define this key.
    pub fn fallback(self) -> Color {
        match self {
            SystemColor::Control | SystemColor::Menu => Color::from_rgb8(192, 192, 192),
            SystemColor::ControlDark | SystemColor::GrayText => Color::from_rgb8(128, 128, 128),
            SystemColor::ControlDarkDark
            | SystemColor::ControlText
            | SystemColor::WindowText
            | SystemColor::WindowFrame
            | SystemColor::MenuText => Color::BLACK,
            SystemColor::ControlLight | SystemColor::ScrollBar => Color::from_rgb8(224, 224, 224),
            SystemColor::ControlLightLight
            | SystemColor::Window
            | SystemColor::HighlightText => Color::WHITE,
            SystemColor::Highlight | SystemColor::ActiveCaption => Color::from_rgb8(0, 0, 128),
            SystemColor::HotTrack => Color::from_rgb8(0, 0, 255),
            SystemColor::InactiveCaption => Color::from_rgb8(128, 128, 128),
        }
    }
}

/// An ordered table of system colors.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    colors: IndexMap<SystemColor, Color>,
}

impl ColorTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            colors: IndexMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: SystemColor, color: Color) -> Self {
        self.colors.insert(key, color);
        self
    }

    /// Look up a color.
    pub fn get(&self, key: SystemColor) -> Option<Color> {
        self.colors.get(&key).copied()
    }

    /// Whether the table defines the given key.
    pub fn contains(&self, key: SystemColor) -> bool {
        self.colors.contains_key(&key)
    }

    /// Number of defined keys.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate over the defined colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (SystemColor, Color)> + '_ {
        self.colors.iter().map(|(key, color)| (*key, *color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_insert_replaces_earlier() {
        let table = ColorTable::new()
            .with(SystemColor::Window, Color::WHITE)
            .with(SystemColor::Window, Color::BLACK);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(SystemColor::Window), Some(Color::BLACK));
    }

    #[test]
    fn iteration_keeps_insertion_order() {
        let table = ColorTable::new()
            .with(SystemColor::Menu, Color::WHITE)
            .with(SystemColor::Control, Color::BLACK);
        let keys: Vec<_> = table.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![SystemColor::Menu, SystemColor::Control]);
    }
}

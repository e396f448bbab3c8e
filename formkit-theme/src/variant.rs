use std::fmt;
use std::str::FromStr;

use crate::error::{ThemeError, ThemeResult};
use crate::theme::{
    clearlooks::ClearlooksTheme, gtk::GtkTheme, nice::NiceTheme,
    visual_styles::VisualStylesTheme, win32::Win32ClassicTheme, Theme,
};

/// The closed set of theme variants formkit can render with.
///
/// Every variant maps to exactly one [Theme] implementation. New variants are
/// added here together with their implementation; there is no runtime
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// Classic gray 3D look. The default.
    #[default]
    Win32Classic,
    /// Gtk-like flat look.
    Gtk,
    /// Soft gradient look.
    Nice,
    /// Clearlooks look.
    Clearlooks,
    /// Modern visual styles. Only selectable when visual styles are available.
    VisualStyles,
}

impl ThemeVariant {
    /// All variants, in declaration order.
    pub const ALL: [ThemeVariant; 5] = [
        ThemeVariant::Win32Classic,
        ThemeVariant::Gtk,
        ThemeVariant::Nice,
        ThemeVariant::Clearlooks,
        ThemeVariant::VisualStyles,
    ];

    /// The lower-case selector literal naming this variant.
    pub const fn selector(self) -> &'static str {
        match self {
            ThemeVariant::Win32Classic => "win32",
            ThemeVariant::Gtk => "gtk",
            ThemeVariant::Nice => "nice",
            ThemeVariant::Clearlooks => "clearlooks",
            ThemeVariant::VisualStyles => "visualstyles",
        }
    }

    /// Whether selecting this variant also depends on an availability check.
    pub const fn is_conditional(self) -> bool {
        matches!(self, ThemeVariant::VisualStyles)
    }

    /// Construct the theme implementation for this variant.
    pub fn instantiate(self) -> Box<dyn Theme> {
        match self {
            ThemeVariant::Win32Classic => Box::new(Win32ClassicTheme::new()),
            ThemeVariant::Gtk => Box::new(GtkTheme::new()),
            ThemeVariant::Nice => Box::new(NiceTheme::new()),
            ThemeVariant::Clearlooks => Box::new(ClearlooksTheme::new()),
            ThemeVariant::VisualStyles => Box::new(VisualStylesTheme::new()),
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for ThemeVariant {
    type Err = ThemeError;

    /// Strict, case-insensitive parse. Unknown selectors are an error here;
    /// the engine is the one that turns them into the default.
    fn from_str(s: &str) -> ThemeResult<Self> {
        let lower = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|variant| variant.selector() == lower)
            .ok_or_else(|| ThemeError::unknown_selector(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_ignores_case() {
        assert_eq!("Clearlooks".parse::<ThemeVariant>(), Ok(ThemeVariant::Clearlooks));
        assert_eq!("VISUALSTYLES".parse::<ThemeVariant>(), Ok(ThemeVariant::VisualStyles));
        assert_eq!("Win32".parse::<ThemeVariant>(), Ok(ThemeVariant::Win32Classic));
    }

    #[test]
    fn parse_rejects_unknown_selector() {
        assert_eq!(
            "metal".parse::<ThemeVariant>(),
            Err(ThemeError::unknown_selector("metal"))
        );
        assert!(" gtk".parse::<ThemeVariant>().is_err());
        // Kelvin sign lower-cases to 'k' under Unicode rules.
        assert!("GT\u{212A}".parse::<ThemeVariant>().is_err());
    }

    #[test]
    fn only_visual_styles_is_conditional() {
        let conditional: Vec<_> = ThemeVariant::ALL
            .into_iter()
            .filter(|v| v.is_conditional())
            .collect();
        assert_eq!(conditional, vec![ThemeVariant::VisualStyles]);
    }

    #[test]
    fn instantiated_theme_reports_its_variant() {
        for variant in ThemeVariant::ALL {
            assert_eq!(variant.instantiate().variant(), variant);
        }
    }

    #[test]
    fn display_uses_selector() {
        assert_eq!(ThemeVariant::Gtk.to_string(), "gtk");
        assert_eq!(ThemeVariant::default().to_string(), "win32");
    }
}

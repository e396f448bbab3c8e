//! Application-level availability of conditional theme variants.
//!
//! Visual styles are opt-in: the application calls [enable_visual_styles]
//! before the first widget is painted, and only then may the engine resolve
//! to [ThemeVariant::VisualStyles].

use std::sync::atomic::{AtomicBool, Ordering};

use crate::variant::ThemeVariant;

static VISUAL_STYLES_ENABLED: AtomicBool = AtomicBool::new(false);

/// Allow the visual styles theme to be selected.
///
/// Must be called before the theme is resolved to have any effect.
pub fn enable_visual_styles() {
    VISUAL_STYLES_ENABLED.store(true, Ordering::SeqCst);
}

/// Whether the application enabled visual styles.
pub fn visual_styles_enabled() -> bool {
    VISUAL_STYLES_ENABLED.load(Ordering::SeqCst)
}

/// Decides whether a conditional variant may be selected.
///
/// Only consulted for variants where [ThemeVariant::is_conditional] holds, and
/// only once their selector has matched.
pub trait AvailabilityPredicate {
    /// Whether `variant` can be used in this process.
    fn is_available(&self, variant: ThemeVariant) -> bool;
}

impl<F> AvailabilityPredicate for F
where
    F: Fn(ThemeVariant) -> bool,
{
    fn is_available(&self, variant: ThemeVariant) -> bool {
        self(variant)
    }
}

/// The default predicate, backed by [visual_styles_enabled].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplicationVisualStyles;

impl AvailabilityPredicate for ApplicationVisualStyles {
    fn is_available(&self, variant: ThemeVariant) -> bool {
        match variant {
            ThemeVariant::VisualStyles => visual_styles_enabled(),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconditional_variants_are_always_available() {
        for variant in ThemeVariant::ALL {
            if !variant.is_conditional() {
                assert!(ApplicationVisualStyles.is_available(variant));
            }
        }
    }

    #[test]
    fn closures_act_as_predicates() {
        let only_gtk = |variant: ThemeVariant| variant == ThemeVariant::Gtk;
        assert!(only_gtk.is_available(ThemeVariant::Gtk));
        assert!(!only_gtk.is_available(ThemeVariant::VisualStyles));
    }
}

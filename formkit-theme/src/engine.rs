//! # Theme Engine
//!
//! Decides, once per process, which [Theme] every widget paints with, and
//! publishes it through [current].
//!
//! Resolution walks [RULES] in order. The first rule whose selector equals the
//! lower-cased configuration wins. The `visualstyles` rule is guarded: it only
//! applies when the [AvailabilityPredicate] allows
//! [ThemeVariant::VisualStyles]. Anything that does not end in a rule,
//! including a failed guard, resolves to [ThemeVariant::Win32Classic].
//!
//! ```rust
//! use formkit_theme::config::ThemeConfig;
//! use formkit_theme::engine::ThemeResolver;
//! use formkit_theme::variant::ThemeVariant;
//!
//! let visual_styles_off = |_: ThemeVariant| false;
//!
//! let resolver = ThemeResolver::new(ThemeConfig::new().with_selector("GTK"), visual_styles_off);
//! assert_eq!(resolver.resolve_variant(), ThemeVariant::Gtk);
//!
//! let resolver = ThemeResolver::new(ThemeConfig::new().with_selector("visualstyles"), visual_styles_off);
//! assert_eq!(resolver.resolve_variant(), ThemeVariant::Win32Classic);
//! ```

use std::sync::OnceLock;

use crate::application::{ApplicationVisualStyles, AvailabilityPredicate};
use crate::config::ThemeConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;
use crate::variant::ThemeVariant;

/// One entry of the ordered selection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRule {
    /// Lower-case selector literal the configuration must equal.
    pub selector: &'static str,
    /// Variant chosen when the rule applies.
    pub variant: ThemeVariant,
    /// Whether the rule also requires the availability predicate to hold.
    pub guarded: bool,
}

impl ThemeRule {
    const fn new(variant: ThemeVariant) -> Self {
        Self {
            selector: variant.selector(),
            variant,
            guarded: variant.is_conditional(),
        }
    }
}

/// The selection rules, in evaluation order. The default variant has no rule:
/// it is what remains when none applies.
pub const RULES: &[ThemeRule] = &[
    ThemeRule::new(ThemeVariant::Gtk),
    ThemeRule::new(ThemeVariant::Nice),
    ThemeRule::new(ThemeVariant::Clearlooks),
    ThemeRule::new(ThemeVariant::VisualStyles),
];

/// Turns a [ThemeConfig] into a theme, consulting an [AvailabilityPredicate]
/// for guarded rules.
///
/// The resolver itself holds no global state; [current] runs one built
/// [from_env](ThemeResolver::from_env) exactly once.
#[derive(Debug, Clone)]
pub struct ThemeResolver<P = ApplicationVisualStyles> {
    config: ThemeConfig,
    predicate: P,
}

impl ThemeResolver {
    /// A resolver for the process environment and the application's visual styles flag.
    pub fn from_env() -> Self {
        Self::new(ThemeConfig::from_env(), ApplicationVisualStyles)
    }
}

impl<P: AvailabilityPredicate> ThemeResolver<P> {
    /// Create a resolver from an explicit configuration and predicate.
    pub fn new(config: ThemeConfig, predicate: P) -> Self {
        Self { config, predicate }
    }

    /// The configuration this resolver reads.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Evaluate the rules, reporting why the default would be used.
    ///
    /// Returns [ThemeError::UnknownSelector] when no rule matches and the
    /// selector is not the default's, and [ThemeError::Unavailable] when the
    /// matching rule's guard fails.
    pub fn resolve_strict(&self) -> ThemeResult<ThemeVariant> {
        let selector = self.config.normalized_selector();

        for rule in RULES {
            if rule.selector != selector {
                continue;
            }
            if rule.guarded && !self.predicate.is_available(rule.variant) {
                return Err(ThemeError::unavailable(rule.variant));
            }
            return Ok(rule.variant);
        }

        let default = ThemeVariant::default();
        if selector == default.selector() {
            Ok(default)
        } else {
            Err(ThemeError::unknown_selector(selector))
        }
    }

    /// Pick the variant. Never fails: unknown or unavailable selectors resolve
    /// to the default variant.
    pub fn resolve_variant(&self) -> ThemeVariant {
        match self.resolve_strict() {
            Ok(variant) => variant,
            Err(err) => {
                log::debug!("{err}; using {}", ThemeVariant::default());
                ThemeVariant::default()
            },
        }
    }

    /// Pick the variant and construct its theme.
    pub fn resolve(&self) -> Box<dyn Theme> {
        let variant = self.resolve_variant();
        log::debug!(
            "Resolved theme '{variant}' from selector {:?}",
            self.config.selector()
        );
        variant.instantiate()
    }
}

static CURRENT: OnceLock<Box<dyn Theme>> = OnceLock::new();

/// The active theme.
///
/// The first call resolves it from `FORMKIT_THEME` and the application's
/// visual styles flag; every call, from any thread, returns the same
/// instance.
pub fn current() -> &'static dyn Theme {
    &**CURRENT.get_or_init(|| ThemeResolver::from_env().resolve())
}

/// Resolve the active theme now instead of on first paint.
pub fn init() -> &'static dyn Theme {
    current()
}

/// Resolve the active theme from an explicit configuration and predicate.
///
/// Has no effect once the theme is resolved: the existing theme is returned
/// and the arguments are dropped.
pub fn init_with<P: AvailabilityPredicate>(config: ThemeConfig, predicate: P) -> &'static dyn Theme {
    &**CURRENT.get_or_init(move || ThemeResolver::new(config, predicate).resolve())
}

/// The active theme, if it has been resolved.
pub fn try_current() -> Option<&'static dyn Theme> {
    CURRENT.get().map(|theme| &**theme)
}

/// Whether the active theme has been resolved.
pub fn is_resolved() -> bool {
    CURRENT.get().is_some()
}

/// The variant of the active theme. Resolves it if needed.
pub fn current_variant() -> ThemeVariant {
    current().variant()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn resolve(selector: Option<&str>, visual_styles: bool) -> ThemeVariant {
        let config = match selector {
            Some(selector) => ThemeConfig::new().with_selector(selector),
            None => ThemeConfig::new(),
        };
        ThemeResolver::new(config, move |_: ThemeVariant| visual_styles).resolve_variant()
    }

    #[test]
    fn no_configuration_resolves_to_classic() {
        assert_eq!(resolve(None, false), ThemeVariant::Win32Classic);
        assert_eq!(resolve(None, true), ThemeVariant::Win32Classic);
    }

    #[test]
    fn selectors_are_case_insensitive() {
        assert_eq!(resolve(Some("GTK"), false), ThemeVariant::Gtk);
        assert_eq!(resolve(Some("Nice"), false), ThemeVariant::Nice);
        assert_eq!(resolve(Some("clearLOOKS"), false), ThemeVariant::Clearlooks);
        assert_eq!(resolve(Some("VisualStyles"), true), ThemeVariant::VisualStyles);
        assert_eq!(resolve(Some("WIN32"), true), ThemeVariant::Win32Classic);
    }

    #[test]
    fn unknown_selectors_resolve_to_classic() {
        for selector in ["bogus", "", " gtk", "gtk2", "visual styles", "classic", "GT\u{212A}", "N\u{130}CE"] {
            assert_eq!(resolve(Some(selector), true), ThemeVariant::Win32Classic, "{selector:?}");
        }
    }

    #[test]
    fn visual_styles_require_availability() {
        assert_eq!(resolve(Some("visualstyles"), true), ThemeVariant::VisualStyles);
        assert_eq!(resolve(Some("visualstyles"), false), ThemeVariant::Win32Classic);
    }

    #[test]
    fn predicate_is_only_consulted_for_the_guarded_rule() {
        let calls = Cell::new(0);
        let counting = |variant: ThemeVariant| {
            calls.set(calls.get() + 1);
            assert_eq!(variant, ThemeVariant::VisualStyles);
            true
        };

        for selector in ["gtk", "nice", "clearlooks", "win32", "bogus"] {
            ThemeResolver::new(ThemeConfig::new().with_selector(selector), &counting).resolve_variant();
        }
        ThemeResolver::new(ThemeConfig::new(), &counting).resolve_variant();
        assert_eq!(calls.get(), 0);

        ThemeResolver::new(ThemeConfig::new().with_selector("VISUALSTYLES"), &counting).resolve_variant();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn strict_resolution_reports_fallback_reason() {
        let off = |_: ThemeVariant| false;
        let strict = |selector: &str| {
            ThemeResolver::new(ThemeConfig::new().with_selector(selector), off).resolve_strict()
        };

        assert_eq!(strict("Win32"), Ok(ThemeVariant::Win32Classic));
        assert_eq!(strict("bogus"), Err(ThemeError::unknown_selector("bogus")));
        assert_eq!(
            strict("visualstyles"),
            Err(ThemeError::unavailable(ThemeVariant::VisualStyles))
        );
    }

    #[test]
    fn rules_cover_every_non_default_variant_once() {
        let mut variants: Vec<_> = RULES.iter().map(|rule| rule.variant).collect();
        variants.sort_by_key(|variant| variant.selector());
        variants.dedup();
        assert_eq!(variants.len(), ThemeVariant::ALL.len() - 1);
        assert!(!variants.contains(&ThemeVariant::default()));
        assert!(RULES.iter().filter(|rule| rule.guarded).all(|rule| rule.variant == ThemeVariant::VisualStyles));
    }

    #[test]
    fn resolve_builds_the_selected_theme() {
        let resolver = ThemeResolver::new(ThemeConfig::new().with_selector("nice"), |_: ThemeVariant| false);
        assert_eq!(resolver.resolve().variant(), ThemeVariant::Nice);
    }
}

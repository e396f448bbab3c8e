//! The global accessor reads `FORMKIT_THEME` on first use and never again.

use formkit_theme::config::THEME_ENV_VAR;
use formkit_theme::{Theme, ThemeVariant};

fn addr(theme: &dyn Theme) -> *const () {
    theme as *const dyn Theme as *const ()
}

#[test]
fn test_current_resolves_once_from_environment() {
    std::env::set_var(THEME_ENV_VAR, "GTK");

    assert!(!formkit_theme::is_resolved());
    assert!(formkit_theme::try_current().is_none());

    let first = formkit_theme::current();
    assert_eq!(first.variant(), ThemeVariant::Gtk);
    assert!(formkit_theme::is_resolved());

    // Later configuration changes are not observed.
    std::env::set_var(THEME_ENV_VAR, "clearlooks");
    formkit_theme::application::enable_visual_styles();

    let second = formkit_theme::current();
    assert_eq!(addr(first), addr(second));
    assert_eq!(formkit_theme::current_variant(), ThemeVariant::Gtk);

    let peeked = formkit_theme::try_current().expect("theme should be resolved");
    assert_eq!(addr(first), addr(peeked));
}

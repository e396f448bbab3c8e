//! Without configuration the classic theme is active, and it stays active.

use formkit_theme::config::{ThemeConfig, THEME_ENV_VAR};
use formkit_theme::{Theme, ThemeVariant};

fn addr(theme: &dyn Theme) -> *const () {
    theme as *const dyn Theme as *const ()
}

#[test]
fn test_absent_configuration_uses_classic_theme() {
    std::env::remove_var(THEME_ENV_VAR);

    let theme = formkit_theme::init();
    assert_eq!(theme.variant(), ThemeVariant::Win32Classic);
    assert_eq!(theme.name(), "Win32 Classic");

    // A resolved engine ignores explicit initialization.
    let again = formkit_theme::init_with(ThemeConfig::new().with_selector("nice"), |_: ThemeVariant| true);
    assert_eq!(addr(theme), addr(again));
    assert_eq!(again.variant(), ThemeVariant::Win32Classic);
}

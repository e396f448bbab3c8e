//! Selection scenarios, exercised through the resolver without global state.

use formkit_theme::config::ThemeConfig;
use formkit_theme::engine::ThemeResolver;
use formkit_theme::theme::gtk::GtkTheme;
use formkit_theme::theme::win32::Win32ClassicTheme;
use formkit_theme::ThemeVariant;

fn resolver(selector: Option<&str>, visual_styles: bool) -> ThemeResolver<impl Fn(ThemeVariant) -> bool> {
    let config = selector.map_or_else(ThemeConfig::new, |s| ThemeConfig::new().with_selector(s));
    ThemeResolver::new(config, move |_: ThemeVariant| visual_styles)
}

#[test]
fn test_no_configuration() {
    let theme = resolver(None, false).resolve();
    assert!(theme.as_any().downcast_ref::<Win32ClassicTheme>().is_some());
}

#[test]
fn test_upper_case_gtk() {
    let theme = resolver(Some("GTK"), false).resolve();
    assert!(theme.as_any().downcast_ref::<GtkTheme>().is_some());
}

#[test]
fn test_visual_styles_unavailable() {
    assert_eq!(resolver(Some("visualstyles"), false).resolve().variant(), ThemeVariant::Win32Classic);
}

#[test]
fn test_visual_styles_available() {
    assert_eq!(resolver(Some("visualstyles"), true).resolve().variant(), ThemeVariant::VisualStyles);
}

#[test]
fn test_bogus_selector() {
    assert_eq!(resolver(Some("bogus"), true).resolve().variant(), ThemeVariant::Win32Classic);
}

#[test]
fn test_every_variant_is_reachable_by_its_selector() {
    for variant in ThemeVariant::ALL {
        let upper = variant.selector().to_uppercase();
        assert_eq!(resolver(Some(upper.as_str()), true).resolve_variant(), variant);
    }
}

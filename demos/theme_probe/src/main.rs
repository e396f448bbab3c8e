//! Prints which theme formkit resolves in the current environment and paints a
//! sample of every control with it.
//!
//! ```bash
//! FORMKIT_THEME=clearlooks RUST_LOG=debug cargo run -p theme_probe
//! FORMKIT_THEME=visualstyles cargo run -p theme_probe -- --visual-styles
//! ```

use formkit::prelude::*;
use formkit::theme::engine::RULES;

fn main() {
    env_logger::init();

    if std::env::args().any(|arg| arg == "--visual-styles") {
        enable_visual_styles();
    }

    println!("Selection rules (first match wins, otherwise {}):", ThemeVariant::default());
    for rule in RULES {
        let guard = if rule.guarded { " [requires visual styles]" } else { "" };
        println!("  {:<14} -> {:?}{}", rule.selector, rule.variant, guard);
    }

    let theme = current();
    println!();
    println!("Active theme: {} ({})", theme.name(), theme.variant());
    println!("Metrics: {:?}", theme.metrics());
    println!("Colors:");
    for (key, color) in theme.colors().iter() {
        let rgba = color.to_rgba8();
        println!("  {:<18} #{:02x}{:02x}{:02x}", format!("{key:?}"), rgba.r, rgba.g, rgba.b);
    }

    let mut scene = Scene::new();
    let row = |i: f64| Rect::new(8.0, 8.0 + i * 32.0, 120.0, 32.0 + i * 32.0);
    theme.draw_button(&mut scene, row(0.0), ButtonState::Normal);
    theme.draw_button(&mut scene, row(1.0), ButtonState::Pressed);
    let check_size = theme.metrics().check_box_size;
    theme.draw_check_box(
        &mut scene,
        Rect::new(8.0, 72.0, 8.0 + check_size, 72.0 + check_size),
        CheckState::Checked,
        ButtonState::Normal,
    );
    let arrow_size = theme.metrics().scrollbar_width;
    theme.draw_scroll_button(
        &mut scene,
        Rect::new(8.0, 104.0, 8.0 + arrow_size, 104.0 + arrow_size),
        ScrollArrow::Down,
        ButtonState::Normal,
    );
    theme.draw_border(&mut scene, row(4.0), BorderStyle::Sunken);
    theme.draw_progress_bar(&mut scene, row(5.0), 0.6);
    theme.draw_focus_rect(&mut scene, row(0.0));

    log::info!("Painted sample controls with the {} theme", theme.name());
    println!();
    println!("Sample scene encoded: {}", !scene.encoding().is_empty());
}

#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme + navbar sheet) stays present.
//!
//! Desktop inlines `ui/assets/theme/main.css` and, in release builds, the navbar
//! sheet. A truncated file or broken path would only show up at runtime as an
//! unstyled window.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

#[test]
fn embedded_css_files_exist_and_are_not_empty() {
    assert!(!EMBEDDED_CSS.trim().is_empty(), "theme CSS is empty");
    assert!(!NAVBAR_CSS.trim().is_empty(), "navbar CSS is empty");
}

#[test]
fn embedded_css_matches_exported_theme() {
    assert_eq!(EMBEDDED_CSS, ui::THEME_CSS);
}

#[test]
fn theme_declares_palette_and_transitions() {
    let palette = ["--color-bg", "--color-terracotta", "--color-charcoal"];
    let keyframes = ["@keyframes accordion-in", "@keyframes drawer-out", "@keyframes pulse"];
    for token in palette.iter().chain(keyframes.iter()) {
        assert!(EMBEDDED_CSS.contains(token), "theme lost `{token}`");
    }
}

#[test]
fn navbar_sheet_styles_both_scroll_states() {
    for class in [".site-nav--top", ".site-nav--scrolled", ".drawer"] {
        assert!(NAVBAR_CSS.contains(class), "navbar sheet lost `{class}`");
    }
}

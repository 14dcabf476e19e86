#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The Rust components emit BEM-style class names; the shared theme and the
navbar sheet must keep a rule for each one the interactive pieces depend on.
This is a substring check, not a CSS parser.

If you rename a class in a component, update the stylesheet and the lists below.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const REQUIRED_THEME_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    ".page-error",
    ".container",
    // Disclosure transitions
    ".disclosure__body",
    ".disclosure__inner",
    ".disclosure--accordion",
    ".disclosure--drawer",
    ".disclosure__body--open",
    ".disclosure__body--closing",
    "@keyframes accordion-in",
    "@keyframes accordion-out",
    "@keyframes drawer-in",
    "@keyframes drawer-out",
    // FAQ
    ".faq-item__trigger",
    ".faq-item__chevron",
    ".faq-item__chevron--flipped",
    ".faq-item__answer",
    // Sections
    ".hero__tiles",
    ".sourcing-map__pin",
    ".sourcing-map__tooltip",
    ".press__brands",
    ".trust__grid",
    ".benefits__grid",
    ".testimonial",
    ".closing__pillar",
    ".site-footer__legal",
    "@media (max-width: 768px)",
];

const REQUIRED_NAVBAR_SELECTORS: &[&str] = &[
    ".announcement",
    ".site-nav {",
    ".site-nav--top",
    ".site-nav--scrolled",
    ".site-nav__menu",
    ".site-nav__bag-count",
    ".drawer {",
    ".drawer__close",
    ".drawer__links",
];

fn missing(css: &str, selectors: &[&'static str]) -> Vec<&'static str> {
    selectors
        .iter()
        .copied()
        .filter(|sel| !css.contains(sel))
        .collect()
}

#[test]
fn theme_contains_required_selectors() {
    let missing = missing(THEME_CSS, REQUIRED_THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_sheet_contains_required_selectors() {
    let missing = missing(NAVBAR_CSS, REQUIRED_NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "Missing {} required selectors in navbar sheet:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_style_classes_have_rules() {
    use ui::core::scroll::NavbarStyle;

    for style in [NavbarStyle::AtTop, NavbarStyle::Scrolled] {
        let class = format!(".{}", style.css_class());
        assert!(NAVBAR_CSS.contains(&class), "no rule for {class}");
    }
}

#[test]
fn disclosure_classes_have_rules() {
    use ui::core::disclosure::{BodyPhase, DisclosureVariant};

    for variant in [DisclosureVariant::Drawer, DisclosureVariant::Accordion] {
        let class = format!(".{}", variant.css_class());
        assert!(THEME_CSS.contains(&class), "no rule for {class}");
    }
    for phase in [BodyPhase::Open, BodyPhase::Closing] {
        let class = format!(".{}", phase.css_class());
        assert!(THEME_CSS.contains(&class), "no rule for {class}");
    }
}

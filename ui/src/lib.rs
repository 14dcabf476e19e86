//! Shared UI crate for the SAAF landing page. State machines, content and
//! views live here; the `web` and `desktop` crates only launch it.

pub mod content;
pub mod core;
pub mod views;

pub mod components {
    // Disclosure bindings: drawer body and FAQ entries (components/disclosure.rs)
    pub mod disclosure;
    pub use disclosure::{use_disclosure, DisclosureBody, DisclosureHandle, FaqEntry, FaqItem};

    // Scroll-derived navbar style (components/scroll_style.rs)
    pub mod scroll_style;
    pub use scroll_style::use_scroll_style;

    mod icons;
    pub use icons::{Icon, IconKind};

    mod section_header;
    pub use section_header::{SectionHeader, StarRow};

    mod site_navbar;
    pub use site_navbar::{NavDrawer, SiteNavbar};

    mod sourcing_map;
    pub use sourcing_map::SourcingMap;
}

/// Shared theme, embedded for hosts that inline their CSS.
pub const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

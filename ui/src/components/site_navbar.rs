use dioxus::prelude::*;

use crate::content::PageContent;
use crate::core::disclosure::DisclosureVariant;
use crate::core::scroll::SCROLL_THRESHOLD_PX;

use super::disclosure::{use_disclosure, DisclosureBody, DisclosureHandle};
use super::icons::{Icon, IconKind};
use super::scroll_style::use_scroll_style;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Announcement strip, sticky navbar and the mobile drawer.
///
/// The navbar compacts once the page scrolls past `SCROLL_THRESHOLD_PX`.
/// Drawer links close the drawer on selection, as does the X control.
#[component]
pub fn SiteNavbar(content: &'static PageContent) -> Element {
    let drawer = use_disclosure(DisclosureVariant::Drawer);
    let style = use_scroll_style(SCROLL_THRESHOLD_PX);
    let nav = &content.nav;

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        div { class: "announcement", "{content.announcement}" }

        nav { class: "site-nav {style().css_class()}",
            div { class: "site-nav__inner",
                div { class: "site-nav__left",
                    button {
                        r#type: "button",
                        class: "site-nav__menu",
                        aria_label: "Open menu",
                        aria_expanded: "{drawer.is_expanded()}",
                        onclick: move |_| drawer.toggle(),
                        Icon { kind: IconKind::Menu, size: 20 }
                    }
                    div { class: "site-nav__links",
                        for link in nav.desktop.iter() {
                            a {
                                key: "{link.href}",
                                class: "site-nav__link",
                                href: "{link.href}",
                                "{link.label}"
                            }
                        }
                    }
                }

                div { class: "site-nav__brand", "{content.brand.name}" }

                div { class: "site-nav__actions",
                    Icon { kind: IconKind::Search, size: 18, class: "site-nav__action" }
                    Icon {
                        kind: IconKind::User,
                        size: 18,
                        class: "site-nav__action site-nav__action--desktop",
                    }
                    div { class: "site-nav__bag site-nav__action",
                        Icon { kind: IconKind::ShoppingBag, size: 18 }
                        span { class: "site-nav__bag-count", "{nav.bag_count}" }
                    }
                }
            }
        }

        NavDrawer { drawer, content }
    }
}

/// Slide-in navigation for narrow viewports. Every control inside closes it.
#[component]
pub fn NavDrawer(drawer: DisclosureHandle, content: &'static PageContent) -> Element {
    rsx! {
        DisclosureBody { handle: drawer, class: "drawer",
            div { class: "drawer__header",
                div { class: "drawer__brand", "{content.brand.name}" }
                button {
                    r#type: "button",
                    class: "drawer__close",
                    aria_label: "Close menu",
                    onclick: move |_| drawer.close(),
                    Icon { kind: IconKind::Close, size: 24 }
                }
            }
            div { class: "drawer__links",
                for link in content.nav.drawer.iter() {
                    a {
                        key: "{link.href}",
                        class: "drawer__link",
                        href: "{link.href}",
                        onclick: move |_| drawer.close(),
                        "{link.label}"
                    }
                }
            }
        }
    }
}

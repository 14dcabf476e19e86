use dioxus::prelude::*;

use crate::content::BenefitIcon;

/// Stroke icons (24x24 grid, lucide geometry).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Menu,
    Close,
    Search,
    User,
    ShoppingBag,
    ChevronDown,
    Star,
    MapPin,
    TestTube,
    Clock,
    Sparkles,
}

impl IconKind {
    fn markup(self) -> &'static str {
        match self {
            Self::Menu => {
                r#"<line x1="4" x2="20" y1="12" y2="12"/><line x1="4" x2="20" y1="6" y2="6"/><line x1="4" x2="20" y1="18" y2="18"/>"#
            }
            Self::Close => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            Self::Search => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#,
            Self::User => {
                r#"<path d="M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#
            }
            Self::ShoppingBag => {
                r#"<path d="M6 2 3 6v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6l-3-4Z"/><path d="M3 6h18"/><path d="M16 10a4 4 0 0 1-8 0"/>"#
            }
            Self::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            Self::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
            Self::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            Self::TestTube => {
                r#"<path d="M21 7 6.82 21.18a2.83 2.83 0 0 1-3.99-.01a2.83 2.83 0 0 1 0-4L17 3"/><path d="m16 2 6 6"/><path d="M12 16H4"/>"#
            }
            Self::Clock => r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#,
            Self::Sparkles => {
                r#"<path d="m12 3-1.912 5.813a2 2 0 0 1-1.275 1.275L3 12l5.813 1.912a2 2 0 0 1 1.275 1.275L12 21l1.912-5.813a2 2 0 0 1 1.275-1.275L21 12l-5.813-1.912a2 2 0 0 1-1.275-1.275L12 3Z"/><path d="M5 3v4"/><path d="M19 17v4"/><path d="M3 5h4"/><path d="M17 19h4"/>"#
            }
        }
    }
}

impl From<BenefitIcon> for IconKind {
    fn from(icon: BenefitIcon) -> Self {
        match icon {
            BenefitIcon::TestTube => Self::TestTube,
            BenefitIcon::Clock => Self::Clock,
            BenefitIcon::Sparkles => Self::Sparkles,
        }
    }
}

fn svg_markup(kind: IconKind, size: u32, filled: bool) -> String {
    let fill = if filled { "currentColor" } else { "none" };
    format!(
        r#"<svg width="{size}" height="{size}" viewBox="0 0 24 24" fill="{fill}" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
        kind.markup()
    )
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[props(default = 20)] size: u32,
    #[props(default)] class: &'static str,
    #[props(default)] filled: bool,
) -> Element {
    let markup = svg_markup(kind, size, filled);

    rsx! {
        span { class: "icon {class}", dangerous_inner_html: "{markup}" }
    }
}

use dioxus::prelude::*;

use super::icons::{Icon, IconKind};

#[component]
pub fn SectionHeader(
    title: String,
    subtitle: Option<String>,
    #[props(default = true)] centered: bool,
) -> Element {
    let class = if centered {
        "section-header section-header--centered"
    } else {
        "section-header"
    };

    rsx! {
        div { class,
            h2 { class: "section-header__title", "{title}" }
            if let Some(subtitle) = subtitle {
                p { class: "section-header__subtitle", "{subtitle}" }
            }
        }
    }
}

/// Row of filled stars (ratings).
#[component]
pub fn StarRow(count: u8, #[props(default = 12)] size: u32) -> Element {
    rsx! {
        div { class: "star-row",
            for i in 0..count {
                Icon { key: "{i}", kind: IconKind::Star, size, filled: true }
            }
        }
    }
}

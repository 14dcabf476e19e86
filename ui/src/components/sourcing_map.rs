use dioxus::prelude::*;

use crate::content::SourcingMap as MapContent;
use crate::core::motion;

use super::icons::{Icon, IconKind};

/// Masked India illustration with a pin per sourcing region.
/// Hovering a pin reveals the region and its spice.
#[component]
pub fn SourcingMap(map: &'static MapContent) -> Element {
    rsx! {
        div { class: "sourcing-map",
            div { class: "sourcing-map__stage",
                img {
                    class: "sourcing-map__image",
                    src: "{map.image}",
                    alt: "{map.image_alt}",
                    "referrerpolicy": "no-referrer",
                }
                div { class: "sourcing-map__pins",
                    for (i, region) in map.regions.iter().enumerate() {
                        div {
                            key: "{region.name}",
                            class: "sourcing-map__pin",
                            style: "left: {region.x}%; top: {region.y}%; animation-delay: {motion::pin_delay_ms(i)}ms;",
                            div { class: "sourcing-map__marker",
                                Icon { kind: IconKind::MapPin, size: 24, class: "sourcing-map__marker-icon" }
                                span { class: "sourcing-map__pulse" }
                            }
                            div { class: "sourcing-map__tooltip",
                                div { class: "sourcing-map__region", "{region.name}" }
                                div { class: "sourcing-map__spice", "{region.spice}" }
                            }
                        }
                    }
                }
            }
            div { class: "sourcing-map__caption",
                h3 { "{map.caption}" }
                p { "{map.subcaption}" }
            }
        }
    }
}

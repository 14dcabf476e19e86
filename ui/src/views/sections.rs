//! Static page sections. None of these hold state; the interactive pieces
//! (navbar, drawer, FAQ entries) live in `components`.

use dioxus::prelude::*;

use crate::components::{FaqItem, Icon, IconKind, SectionHeader, SourcingMap, StarRow};
use crate::content::{anchors, PageContent};
use crate::core::motion;

#[component]
pub fn HeroSection(content: &'static PageContent) -> Element {
    let hero = &content.hero;

    rsx! {
        section { id: anchors::SHOP, class: "hero",
            div { class: "container",
                div { class: "hero__intro",
                    div { class: "hero__rating",
                        StarRow { count: 5, size: 12 }
                        span { class: "eyebrow", "{hero.rating_label}" }
                    }
                    h1 { class: "hero__headline",
                        "{hero.headline}"
                        br {}
                        em { "{hero.headline_emphasis}" }
                    }
                    button { r#type: "button", class: "button button--primary", "{hero.cta}" }
                }
                div { class: "hero__tiles",
                    for (i, tile) in hero.tiles.iter().enumerate() {
                        div {
                            key: "{tile.name}",
                            class: "hero__tile rise-in",
                            style: "animation-delay: {motion::tile_delay_ms(i)}ms;",
                            div { class: "hero__tile-frame",
                                img {
                                    src: "{tile.image}",
                                    alt: "{tile.name}",
                                    "referrerpolicy": "no-referrer",
                                }
                            }
                            h3 { class: "hero__tile-name", "{tile.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SourcingSection(content: &'static PageContent) -> Element {
    let sourcing = &content.sourcing;

    rsx! {
        section { id: anchors::IMPACT, class: "sourcing",
            div { class: "container sourcing__grid",
                div {
                    div { class: "eyebrow eyebrow--accent", "{sourcing.eyebrow}" }
                    h2 { class: "display",
                        "{sourcing.headline}"
                        br {}
                        em { "{sourcing.headline_emphasis}" }
                    }
                    p { class: "lead", "{sourcing.body}" }
                    div { class: "sourcing__stats",
                        for stat in sourcing.stats.iter() {
                            div { key: "{stat.label}",
                                div { class: "sourcing__stat-value", "{stat.value}" }
                                div { class: "eyebrow eyebrow--muted", "{stat.label}" }
                            }
                        }
                    }
                    button { r#type: "button", class: "button button--secondary", "{sourcing.cta}" }
                }
                SourcingMap { map: &sourcing.map }
            }
        }
    }
}

#[component]
pub fn PressBar(content: &'static PageContent) -> Element {
    rsx! {
        section { class: "press",
            div { class: "container press__brands",
                for brand in content.press.iter() {
                    span { key: "{brand}", class: "press__brand", "{brand}" }
                }
            }
        }
    }
}

#[component]
pub fn TrustDeficitSection(content: &'static PageContent) -> Element {
    let trust = &content.trust_deficit;

    rsx! {
        section { class: "trust",
            div { class: "container container--narrow",
                SectionHeader { title: trust.title.clone(), subtitle: trust.subtitle.clone() }
                div { class: "trust__grid",
                    for point in trust.points.iter() {
                        div { key: "{point}", class: "trust__card",
                            span { class: "trust__dot" }
                            p { "{point}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn BenefitsSection(content: &'static PageContent) -> Element {
    let benefits = &content.benefits;

    rsx! {
        section { id: anchors::LEARN, class: "benefits",
            div { class: "container",
                SectionHeader { title: benefits.title.clone(), subtitle: benefits.subtitle.clone() }
                div { class: "benefits__grid",
                    for benefit in benefits.items.iter() {
                        div { key: "{benefit.title}", class: "benefit",
                            div { class: "benefit__badge",
                                Icon { kind: IconKind::from(benefit.icon), size: 32 }
                            }
                            h3 { class: "benefit__title", "{benefit.title}" }
                            p { class: "benefit__body", "{benefit.body}" }
                            div { class: "eyebrow eyebrow--accent", "{benefit.tagline}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TestimonialsSection(content: &'static PageContent) -> Element {
    let testimonials = &content.testimonials;

    rsx! {
        section { class: "testimonials",
            div { class: "testimonials__wash" }
            div { class: "container testimonials__grid",
                div {
                    h2 { class: "display",
                        "{testimonials.headline}"
                        br {}
                        em { "{testimonials.headline_emphasis}" }
                    }
                    div { class: "testimonials__list",
                        for testimonial in testimonials.items.iter() {
                            blockquote { key: "{testimonial.name}", class: "testimonial",
                                StarRow { count: testimonial.rating, size: 14 }
                                p { class: "testimonial__text", "\"{testimonial.text}\"" }
                                div { class: "eyebrow eyebrow--muted", "{testimonial.attribution()}" }
                            }
                        }
                    }
                }
                div { class: "testimonials__image",
                    img {
                        src: "{testimonials.image}",
                        alt: "{testimonials.image_alt}",
                        "referrerpolicy": "no-referrer",
                    }
                }
            }
        }
    }
}

#[component]
pub fn FaqSection(content: &'static PageContent) -> Element {
    let faq = &content.faq;

    rsx! {
        section { id: anchors::FAQ, class: "faq",
            div { class: "container container--prose",
                SectionHeader { title: faq.title.clone(), centered: false }
                div { class: "faq__items",
                    for entry in faq.items.iter() {
                        FaqItem {
                            key: "{entry.question}",
                            question: entry.question.clone(),
                            answer: entry.answer.clone(),
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ClosingSection(content: &'static PageContent) -> Element {
    let closing = &content.closing;

    rsx! {
        section { class: "closing",
            div { class: "container container--narrow",
                h2 { class: "closing__headline", em { "{closing.headline}" } }
                p { class: "closing__body", "{closing.body}" }
                button { r#type: "button", class: "button button--inverse", "{closing.cta}" }
                div { class: "closing__pillars",
                    for pillar in closing.pillars.iter() {
                        span { key: "{pillar}", class: "closing__pillar", "{pillar}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SiteFooter(content: &'static PageContent) -> Element {
    let footer = &content.footer;

    rsx! {
        footer { class: "site-footer",
            div { class: "container site-footer__grid",
                div {
                    div { class: "site-footer__brand", "{content.brand.name}" }
                    p { class: "site-footer__blurb", "{content.brand.blurb}" }
                }
                for column in footer.columns.iter() {
                    div { key: "{column.heading}",
                        h4 { class: "site-footer__heading", "{column.heading}" }
                        div { class: "site-footer__links",
                            for link in column.links.iter() {
                                a { key: "{link.label}", href: "{link.href}", "{link.label}" }
                            }
                        }
                    }
                }
            }
            div { class: "container site-footer__legal",
                div { "{content.brand.copyright}" }
                div { class: "site-footer__legal-links",
                    for link in footer.legal.iter() {
                        a { key: "{link.label}", href: "{link.href}", "{link.label}" }
                    }
                }
            }
        }
    }
}

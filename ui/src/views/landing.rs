use dioxus::prelude::*;

use crate::components::SiteNavbar;
use crate::content;

use super::sections::{
    BenefitsSection, ClosingSection, FaqSection, HeroSection, PressBar, SiteFooter,
    SourcingSection, TestimonialsSection, TrustDeficitSection,
};

/// The whole landing page, top to bottom.
#[component]
pub fn LandingPage() -> Element {
    let page = match content::page() {
        Ok(page) => page,
        Err(err) => {
            return rsx! {
                div { class: "page-error", "⚠️ {err}" }
            };
        }
    };

    rsx! {
        div { class: "page page-landing",
            SiteNavbar { content: page }
            HeroSection { content: page }
            SourcingSection { content: page }
            PressBar { content: page }
            TrustDeficitSection { content: page }
            BenefitsSection { content: page }
            TestimonialsSection { content: page }
            FaqSection { content: page }
            ClosingSection { content: page }
            SiteFooter { content: page }
        }
    }
}

//! Static page content.
//!
//! All copy, image URLs and link lists come from the embedded catalog at
//! `assets/content/saaf.json`. The catalog is parsed once on first access.

use once_cell::sync::Lazy;
use serde::Deserialize;

const CATALOG_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/content/saaf.json"
));

/// In-page anchors rendered by the landing page.
pub mod anchors {
    pub const SHOP: &str = "shop";
    pub const IMPACT: &str = "impact";
    pub const LEARN: &str = "learn";
    pub const FAQ: &str = "faq";

    pub const ALL: &[&str] = &[SHOP, IMPACT, LEARN, FAQ];
}

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("content catalog is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageContent {
    pub brand: Brand,
    pub announcement: String,
    pub nav: Navigation,
    pub hero: Hero,
    pub sourcing: Sourcing,
    pub press: Vec<String>,
    pub trust_deficit: TrustDeficit,
    pub benefits: Benefits,
    pub testimonials: Testimonials,
    pub faq: Faq,
    pub closing: Closing,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub name: String,
    pub blurb: String,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    /// Target section id for in-page links (`#faq` -> `faq`).
    pub fn anchor(&self) -> Option<&str> {
        self.href.strip_prefix('#').filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Navigation {
    pub desktop: Vec<NavLink>,
    pub drawer: Vec<NavLink>,
    #[serde(default)]
    pub bag_count: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub rating_label: String,
    pub headline: String,
    pub headline_emphasis: String,
    pub cta: String,
    pub tiles: Vec<SpiceTile>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SpiceTile {
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sourcing {
    pub eyebrow: String,
    pub headline: String,
    pub headline_emphasis: String,
    pub body: String,
    pub stats: Vec<Stat>,
    pub cta: String,
    pub map: SourcingMap,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SourcingMap {
    pub image: String,
    pub image_alt: String,
    pub caption: String,
    pub subcaption: String,
    pub regions: Vec<Region>,
}

/// A sourcing region pinned on the map. `x`/`y` are percentages of the map box.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Region {
    pub name: String,
    pub spice: String,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrustDeficit {
    pub title: String,
    pub subtitle: String,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Benefits {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Benefit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BenefitIcon {
    TestTube,
    Clock,
    Sparkles,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Benefit {
    pub icon: BenefitIcon,
    pub title: String,
    pub body: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonials {
    pub headline: String,
    pub headline_emphasis: String,
    pub image: String,
    pub image_alt: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub name: String,
    pub city: String,
    pub rating: u8,
    pub text: String,
}

impl Testimonial {
    pub fn attribution(&self) -> String {
        format!("{} — {}", self.name, self.city)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Faq {
    pub title: String,
    pub items: Vec<FaqEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Closing {
    pub headline: String,
    pub body: String,
    pub cta: String,
    pub pillars: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub columns: Vec<FooterColumn>,
    pub legal: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FooterColumn {
    pub heading: String,
    pub links: Vec<NavLink>,
}

/// Parse a catalog document.
pub fn parse(json: &str) -> Result<PageContent, ContentError> {
    Ok(serde_json::from_str(json)?)
}

static PAGE: Lazy<Result<PageContent, ContentError>> = Lazy::new(|| {
    let parsed = parse(CATALOG_JSON);
    if let Err(err) = &parsed {
        tracing::error!("{err}");
    }
    parsed
});

/// The embedded catalog.
pub fn page() -> Result<&'static PageContent, &'static ContentError> {
    (*PAGE).as_ref()
}

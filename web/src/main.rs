use dioxus::prelude::*;
use tracing::Level;

use ui::core::platform::Platform;
use ui::views::LandingPage;
use ui::THEME_CSS;

fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(err) = dioxus_logger::init(level) {
        eprintln!("failed to init logger: {err}");
    }
    tracing::info!(platform = ?Platform::current(), "launching SAAF landing page");

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "SAAF Masale — Lab-tested spices" }
        document::Style { "{THEME_CSS}" }

        LandingPage {}
    }
}

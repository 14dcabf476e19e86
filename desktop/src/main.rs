#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use dioxus::desktop::{tao::window::WindowBuilder, Config};
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

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("SAAF Masale – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // The shared theme is always inlined; desktop ships no separate /assets.
        document::Style { "{THEME_CSS}" }

        LandingPage {}
    }
}

//! Platform detection and runtime glue.

use std::future::Future;

use super::subscription::ScrollSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}

/// Spawn a future onto the Dioxus runtime of the calling component.
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    dioxus::prelude::spawn(future);
}

/// Scroll source for the running platform.
pub fn scroll_source() -> Box<dyn ScrollSource> {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(super::subscription::WindowScrollSource)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(super::subscription::EvalScrollSource)
    }
}

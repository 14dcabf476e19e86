use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::core::platform;
use crate::core::scroll::{NavbarStyle, ScrollStyleSwitch};
use crate::core::subscription::{ScrollSubscription, SharedScrollSource};

/// Navbar style derived from the page scroll offset.
///
/// The scroll subscription is acquired after the first render and released
/// when the calling component is dropped. An ancestor may provide a
/// [`SharedScrollSource`] context; otherwise the platform source is used. If no
/// scroll source can be attached the style stays `AtTop`.
pub fn use_scroll_style(threshold_px: f64) -> ReadOnlySignal<NavbarStyle> {
    let style = use_signal(|| NavbarStyle::AtTop);
    let source = use_hook(|| {
        try_consume_context::<SharedScrollSource>()
            .unwrap_or_else(|| Rc::from(platform::scroll_source()))
    });
    let slot = use_hook(|| Rc::new(RefCell::new(None::<ScrollSubscription>)));

    let effect_slot = slot.clone();
    use_effect(move || {
        let switch = Rc::new(RefCell::new(ScrollStyleSwitch::new(threshold_px)));
        let mut style = style;
        let handler = move |offset: f64| {
            if let Some(next) = switch.borrow_mut().on_scroll(offset) {
                style.set(next);
            }
        };

        match source.subscribe(Box::new(handler)) {
            Ok(subscription) => {
                effect_slot.borrow_mut().replace(subscription);
            }
            Err(err) => tracing::warn!("navbar scroll style disabled: {err}"),
        }
    });

    use_drop(move || {
        if let Some(subscription) = slot.borrow_mut().take() {
            subscription.release();
        }
    });

    style.into()
}

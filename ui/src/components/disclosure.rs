//! Dioxus bindings for [`Disclosure`].
//!
//! `use_disclosure` owns the state in a signal and schedules exit completion
//! once the variant's transition has had time to play. `DisclosureBody` keeps
//! the body mounted through `Open` and `Closing` and drops it afterwards.

use dioxus::prelude::*;

use crate::core::disclosure::{BodyPhase, Disclosure, DisclosureVariant, ExitTicket};
use crate::core::{platform, timing};

use super::icons::{Icon, IconKind};

#[derive(Clone, Copy, PartialEq)]
pub struct DisclosureHandle {
    state: Signal<Disclosure>,
}

impl DisclosureHandle {
    pub fn is_expanded(&self) -> bool {
        self.state.read().is_expanded()
    }

    pub fn body_phase(&self) -> BodyPhase {
        self.state.read().body_phase()
    }

    pub fn variant(&self) -> DisclosureVariant {
        self.state.peek().variant()
    }

    pub fn toggle(&self) {
        let mut state = self.state;
        let ticket = state.with_mut(|panel| panel.toggle());
        tracing::trace!(expanded = ticket.is_none(), "disclosure toggled");
        self.schedule_exit(ticket);
    }

    pub fn close(&self) {
        let mut state = self.state;
        let ticket = state.with_mut(|panel| panel.close());
        self.schedule_exit(ticket);
    }

    fn schedule_exit(&self, ticket: Option<ExitTicket>) {
        let Some(ticket) = ticket else {
            return;
        };
        let mut state = self.state;
        let delay = state.peek().variant().exit_duration_ms();
        platform::spawn_future(async move {
            timing::sleep_ms(delay).await;
            if !state.with_mut(|panel| panel.finish_exit(ticket)) {
                tracing::trace!("stale disclosure exit ignored");
            }
        });
    }
}

pub fn use_disclosure(variant: DisclosureVariant) -> DisclosureHandle {
    let state = use_signal(|| Disclosure::new(variant));
    DisclosureHandle { state }
}

/// Body region of a disclosure, annotated with its enter/exit phase.
#[component]
pub fn DisclosureBody(
    handle: DisclosureHandle,
    #[props(default)] class: &'static str,
    children: Element,
) -> Element {
    let phase = handle.body_phase();
    let variant = handle.variant();

    rsx! {
        if phase.is_mounted() {
            div {
                class: "disclosure__body {variant.css_class()} {phase.css_class()} {class}",
                div { class: "disclosure__inner", {children} }
            }
        }
    }
}

/// FAQ entry with its own disclosure state.
#[component]
pub fn FaqItem(question: String, answer: String) -> Element {
    let panel = use_disclosure(DisclosureVariant::Accordion);

    rsx! {
        FaqEntry { panel, question, answer }
    }
}

/// FAQ question trigger with a chevron and a collapsible answer, driven by
/// a caller-owned handle.
#[component]
pub fn FaqEntry(panel: DisclosureHandle, question: String, answer: String) -> Element {
    let expanded = panel.is_expanded();
    let chevron = if expanded {
        "faq-item__chevron faq-item__chevron--flipped"
    } else {
        "faq-item__chevron"
    };

    rsx! {
        div { class: "faq-item",
            button {
                r#type: "button",
                class: "faq-item__trigger",
                aria_expanded: "{expanded}",
                onclick: move |_| panel.toggle(),
                span { class: "faq-item__question", "{question}" }
                Icon { kind: IconKind::ChevronDown, size: 20, class: chevron }
            }
            DisclosureBody { handle: panel,
                p { class: "faq-item__answer", "{answer}" }
            }
        }
    }
}

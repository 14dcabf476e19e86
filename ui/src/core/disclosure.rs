//! Disclosure state machine shared by the mobile drawer and FAQ entries.
//!
//! A disclosure owns one boolean (`expanded`) and flips it on a single trigger
//! event. The body region is tracked separately through [`BodyPhase`] so the
//! renderer can keep it mounted while an exit transition plays:
//!
//! ```text
//! Collapsed --toggle--> Expanded --toggle--> Collapsed
//! body:  Unmounted        Open        Closing --finish_exit--> Unmounted
//! ```
//!
//! Exit completion is driven by an [`ExitTicket`]. Re-opening while a body is
//! still closing bumps the generation, so a late ticket from the earlier close
//! is ignored. Nothing logical waits on the transition: `is_expanded()` changes
//! as soon as the trigger fires.

/// Presentation flavour of a disclosure. State logic is identical for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisclosureVariant {
    /// Full-bleed overlay sliding in horizontally (mobile navigation).
    Drawer,
    /// Body grows from zero height to its natural height while fading in (FAQ).
    Accordion,
}

impl DisclosureVariant {
    /// Time the exit transition needs before the body can be unmounted.
    pub fn exit_duration_ms(self) -> u64 {
        match self {
            Self::Drawer => 300,
            Self::Accordion => 300,
        }
    }

    /// Block modifier used by the theme (`.disclosure--drawer`, ...).
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Drawer => "disclosure--drawer",
            Self::Accordion => "disclosure--accordion",
        }
    }
}

/// Render-facing phase of the body region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyPhase {
    Unmounted,
    Open,
    Closing,
}

impl BodyPhase {
    pub fn is_mounted(self) -> bool {
        !matches!(self, Self::Unmounted)
    }

    /// Element modifier annotating the enter or exit transition.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Unmounted => "disclosure__body--hidden",
            Self::Open => "disclosure__body--open",
            Self::Closing => "disclosure__body--closing",
        }
    }
}

/// Proof that a collapse happened at a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    variant: DisclosureVariant,
    expanded: bool,
    phase: BodyPhase,
    generation: u64,
}

impl Disclosure {
    pub fn new(variant: DisclosureVariant) -> Self {
        Self {
            variant,
            expanded: false,
            phase: BodyPhase::Unmounted,
            generation: 0,
        }
    }

    pub fn variant(&self) -> DisclosureVariant {
        self.variant
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn body_phase(&self) -> BodyPhase {
        self.phase
    }

    /// Flip the panel. Returns a ticket when the flip started an exit transition.
    pub fn toggle(&mut self) -> Option<ExitTicket> {
        if self.expanded {
            self.collapse()
        } else {
            self.expand();
            None
        }
    }

    /// Force the panel shut (drawer link selection, dedicated close control).
    pub fn close(&mut self) -> Option<ExitTicket> {
        if self.expanded {
            self.collapse()
        } else {
            None
        }
    }

    /// Unmount the body once its exit transition has played.
    ///
    /// Returns `false` for stale tickets or when the panel was re-opened.
    pub fn finish_exit(&mut self, ticket: ExitTicket) -> bool {
        if ticket.generation != self.generation || self.phase != BodyPhase::Closing {
            return false;
        }
        self.phase = BodyPhase::Unmounted;
        true
    }

    fn expand(&mut self) {
        self.expanded = true;
        self.phase = BodyPhase::Open;
        self.generation = self.generation.wrapping_add(1);
    }

    fn collapse(&mut self) -> Option<ExitTicket> {
        self.expanded = false;
        self.phase = BodyPhase::Closing;
        self.generation = self.generation.wrapping_add(1);
        Some(ExitTicket {
            generation: self.generation,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_collapsed_and_unmounted() {
        let panel = Disclosure::new(DisclosureVariant::Accordion);
        assert!(!panel.is_expanded());
        assert_eq!(panel.body_phase(), BodyPhase::Unmounted);
    }

    #[test]
    fn faq_entry_open_then_close() {
        let mut panel = Disclosure::new(DisclosureVariant::Accordion);

        assert!(panel.toggle().is_none());
        assert!(panel.is_expanded());
        assert_eq!(panel.body_phase(), BodyPhase::Open);

        let ticket = panel.toggle().expect("collapse yields an exit ticket");
        assert!(!panel.is_expanded());
        assert_eq!(panel.body_phase(), BodyPhase::Closing);

        assert!(panel.finish_exit(ticket));
        assert_eq!(panel.body_phase(), BodyPhase::Unmounted);
    }

    #[test]
    fn reopening_during_exit_ignores_stale_ticket() {
        let mut panel = Disclosure::new(DisclosureVariant::Drawer);
        panel.toggle();
        let stale = panel.toggle().expect("ticket");
        panel.toggle();

        assert!(!panel.finish_exit(stale));
        assert!(panel.is_expanded());
        assert_eq!(panel.body_phase(), BodyPhase::Open);
    }

    #[test]
    fn finishing_twice_is_a_no_op() {
        let mut panel = Disclosure::new(DisclosureVariant::Accordion);
        panel.toggle();
        let ticket = panel.toggle().expect("ticket");
        assert!(panel.finish_exit(ticket));
        assert!(!panel.finish_exit(ticket));
    }

    #[test]
    fn drawer_close_from_link_and_close_control() {
        let mut drawer = Disclosure::new(DisclosureVariant::Drawer);
        drawer.toggle();
        assert!(drawer.close().is_some());
        assert!(!drawer.is_expanded());

        // Second close (e.g. X pressed while link close is animating) does nothing.
        assert!(drawer.close().is_none());
        assert_eq!(drawer.body_phase(), BodyPhase::Closing);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut first = Disclosure::new(DisclosureVariant::Accordion);
        let second = Disclosure::new(DisclosureVariant::Accordion);
        first.toggle();
        assert!(first.is_expanded());
        assert!(!second.is_expanded());
        assert_eq!(second.body_phase(), BodyPhase::Unmounted);
    }

    #[test]
    fn variant_classes() {
        assert_eq!(DisclosureVariant::Drawer.css_class(), "disclosure--drawer");
        assert_eq!(
            DisclosureVariant::Accordion.css_class(),
            "disclosure--accordion"
        );
        assert!(!BodyPhase::Unmounted.is_mounted());
        assert!(BodyPhase::Closing.is_mounted());
    }

    proptest! {
        #[test]
        fn parity_of_toggle_count(n in 0usize..64) {
            let mut panel = Disclosure::new(DisclosureVariant::Accordion);
            for _ in 0..n {
                panel.toggle();
            }
            prop_assert_eq!(panel.is_expanded(), n % 2 == 1);
        }

        #[test]
        fn toggling_one_leaves_others_untouched(
            toggles in proptest::collection::vec(0usize..4, 0..40)
        ) {
            let mut panels: Vec<Disclosure> =
                (0..4).map(|_| Disclosure::new(DisclosureVariant::Accordion)).collect();
            let mut counts = [0usize; 4];
            for idx in toggles {
                panels[idx].toggle();
                counts[idx] += 1;
            }
            for (panel, count) in panels.iter().zip(counts) {
                prop_assert_eq!(panel.is_expanded(), count % 2 == 1);
            }
        }
    }
}

use std::time::Duration;

use crate::{
    layout::LayoutProbe,
    scroll::ScrollState,
    sections::{Section, SectionRegistry},
};

pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(1_000);

/// Work the host must do after a navigation starts: scroll to `scroll_to`
/// and hand the ticket back to [`SmoothScrollNavigator::settle`] once
/// `settle_after` has elapsed (or the platform reports scroll completion).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavigationTicket {
    pub target: Section,
    pub scroll_to: f64,
    pub settle_after: Duration,
    generation: u64,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SmoothScrollNavigator {
    settle_delay: Duration,
    generation: u64,
    in_flight: Option<u64>,
}

impl Default for SmoothScrollNavigator {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl SmoothScrollNavigator {
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            settle_delay,
            generation: 0,
            in_flight: None,
        }
    }

    /// Starts a navigation toward `id`. Unknown or unmounted targets leave
    /// `state` untouched and return `None`. A call while another navigation
    /// is in flight retargets it and supersedes the earlier ticket.
    pub fn begin(
        &mut self,
        state: &mut ScrollState,
        registry: &SectionRegistry,
        id: &str,
        probe: &impl LayoutProbe,
    ) -> Option<NavigationTicket> {
        let target = registry.resolve(id)?;
        let bounds = registry.measure(id, probe)?;

        self.generation = self.generation.wrapping_add(1);
        self.in_flight = Some(self.generation);

        state.is_transitioning = true;
        state.active_section = target;

        Some(NavigationTicket {
            target,
            scroll_to: bounds.offset_top.max(0.0),
            settle_after: self.settle_delay,
            generation: self.generation,
        })
    }

    /// Ends the transition if `ticket` is still the latest one.
    pub fn settle(&mut self, state: &mut ScrollState, ticket: &NavigationTicket) -> bool {
        if self.in_flight != Some(ticket.generation) {
            return false;
        }

        self.in_flight = None;
        state.is_transitioning = false;
        true
    }

    /// Drops any in-flight navigation, e.g. on teardown.
    pub fn cancel(&mut self, state: &mut ScrollState) {
        self.in_flight = None;
        state.is_transitioning = false;
    }
}

#[cfg(test)]
impl SmoothScrollNavigator {
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FakeLayout;

    fn page() -> FakeLayout {
        FakeLayout::with_sections(
            3_000.0,
            800.0,
            &[
                (Section::Home, 0.0, 800.0),
                (Section::Projects, 800.0, 800.0),
                (Section::Contact, 1_600.0, 1_400.0),
            ],
        )
    }

    #[test]
    fn begin_pins_target_immediately() {
        let layout = page();
        let registry = SectionRegistry::default();
        let mut navigator = SmoothScrollNavigator::default();
        let mut state = ScrollState::default();

        let ticket = navigator
            .begin(&mut state, &registry, "projects", &layout)
            .expect("projects is mounted");

        assert_eq!(state.active_section, Section::Projects);
        assert!(state.is_transitioning);
        assert_eq!(ticket.scroll_to, 800.0);
        assert_eq!(ticket.settle_after, DEFAULT_SETTLE_DELAY);
        assert!(navigator.is_in_flight());
    }

    #[test]
    fn unknown_target_is_a_no_op() {
        let layout = page();
        let registry = SectionRegistry::default();
        let mut navigator = SmoothScrollNavigator::default();
        let mut state = ScrollState::default();
        let before = state.clone();

        assert!(navigator.begin(&mut state, &registry, "blog", &layout).is_none());
        assert!(navigator.begin(&mut state, &registry, "skills", &layout).is_none());

        assert_eq!(state, before);
        assert!(!navigator.is_in_flight());
    }

    #[test]
    fn superseded_ticket_does_not_settle() {
        let layout = page();
        let registry = SectionRegistry::default();
        let mut navigator = SmoothScrollNavigator::default();
        let mut state = ScrollState::default();

        let first = navigator
            .begin(&mut state, &registry, "projects", &layout)
            .expect("mounted");
        let second = navigator
            .begin(&mut state, &registry, "contact", &layout)
            .expect("mounted");

        assert!(!navigator.settle(&mut state, &first));
        assert!(state.is_transitioning);
        assert_eq!(state.active_section, Section::Contact);

        assert!(navigator.settle(&mut state, &second));
        assert!(!state.is_transitioning);
        assert!(!navigator.settle(&mut state, &second));
    }

    #[test]
    fn cancel_clears_transition() {
        let layout = page();
        let registry = SectionRegistry::default();
        let mut navigator = SmoothScrollNavigator::new(Duration::from_millis(250));
        let mut state = ScrollState::default();

        let ticket = navigator
            .begin(&mut state, &registry, "home", &layout)
            .expect("mounted");
        navigator.cancel(&mut state);

        assert!(!state.is_transitioning);
        assert!(!navigator.settle(&mut state, &ticket));
        assert_eq!(navigator.settle_delay(), Duration::from_millis(250));
    }
}

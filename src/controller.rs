use std::{cell::RefCell, rc::Rc};

use crate::{
    config::SiteConfig,
    events::{EventHub, Subscription, ViewportEvent},
    layout::LayoutProbe,
    navigator::{NavigationTicket, SmoothScrollNavigator},
    scroll::{ScrollState, ScrollTracker},
    sections::SectionRegistry,
};

/// Sole writer of [`ScrollState`]: scroll/resize recomputation goes through
/// the tracker and click-to-navigate goes through the navigator.
#[derive(Clone, PartialEq, Debug)]
pub struct ScrollController {
    state: ScrollState,
    tracker: ScrollTracker,
    navigator: SmoothScrollNavigator,
}

impl ScrollController {
    pub fn new(tracker: ScrollTracker, navigator: SmoothScrollNavigator) -> Self {
        Self {
            state: ScrollState::default(),
            tracker,
            navigator,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(
            ScrollTracker::new(SectionRegistry::default(), config.active_lookahead_px),
            SmoothScrollNavigator::new(config.settle_delay),
        )
    }

    pub fn state(&self) -> &ScrollState {
        &self.state
    }

    pub fn registry(&self) -> &SectionRegistry {
        self.tracker.registry()
    }

    pub fn on_viewport_event(&mut self, probe: &impl LayoutProbe) -> bool {
        self.tracker.recompute(&mut self.state, probe)
    }

    pub fn navigate_to(&mut self, id: &str, probe: &impl LayoutProbe) -> Option<NavigationTicket> {
        self.navigator
            .begin(&mut self.state, self.tracker.registry(), id, probe)
    }

    pub fn settle(&mut self, ticket: &NavigationTicket) -> bool {
        self.navigator.settle(&mut self.state, ticket)
    }

    pub fn cancel_navigation(&mut self) {
        self.navigator.cancel(&mut self.state);
    }

    /// Recomputes on every viewport event and reports changed states to
    /// `on_change`. The returned subscription detaches the controller.
    pub fn attach<P>(
        controller: &Rc<RefCell<Self>>,
        events: &EventHub<ViewportEvent>,
        probe: Rc<P>,
        on_change: impl Fn(&ScrollState) + 'static,
    ) -> Subscription
    where
        P: LayoutProbe + 'static,
    {
        let weak = Rc::downgrade(controller);
        events.subscribe(move |_event| {
            let Some(controller) = weak.upgrade() else {
                return;
            };

            let changed = controller.borrow_mut().on_viewport_event(probe.as_ref());
            if changed {
                let snapshot = controller.borrow().state.clone();
                on_change(&snapshot);
            }
        })
    }
}

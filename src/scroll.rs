use crate::{
    layout::{LayoutProbe, ScrollMetrics},
    sections::{Section, SectionRegistry},
};

pub const DEFAULT_ACTIVE_LOOKAHEAD_PX: f64 = 100.0;

#[derive(Clone, PartialEq, Debug)]
pub struct ScrollState {
    pub progress_percent: f64,
    pub active_section: Section,
    /// While set, `active_section` is pinned to the navigation target.
    pub is_transitioning: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            progress_percent: 0.0,
            active_section: Section::Home,
            is_transitioning: false,
        }
    }
}

/// Share of the scrollable distance already travelled, in `[0, 100]`.
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let max_scroll = metrics.max_scroll();
    if !(max_scroll > 0.0) || !metrics.scroll_top.is_finite() {
        return 0.0;
    }

    (metrics.scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
}

#[derive(Clone, PartialEq, Debug)]
pub struct ScrollTracker {
    registry: SectionRegistry,
    lookahead_px: f64,
}

impl ScrollTracker {
    pub fn new(registry: SectionRegistry, lookahead_px: f64) -> Self {
        Self {
            registry,
            lookahead_px,
        }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn active_section_at(&self, scroll_top: f64, probe: &impl LayoutProbe) -> Option<Section> {
        self.registry
            .first_containing(scroll_top + self.lookahead_px, probe)
    }

    /// Recomputes progress and, unless a navigation is in flight, the active
    /// section. A scan with no match keeps the previous active section.
    /// Returns whether the state changed.
    pub fn recompute(&self, state: &mut ScrollState, probe: &impl LayoutProbe) -> bool {
        let metrics = probe.scroll_metrics();
        let before = state.clone();

        state.progress_percent = progress_percent(metrics);

        if !state.is_transitioning {
            if let Some(section) = self.active_section_at(metrics.scroll_top, probe) {
                state.active_section = section;
            }
        }

        *state != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::testing::FakeLayout;

    fn standard_page() -> FakeLayout {
        FakeLayout::with_sections(
            3_800.0,
            800.0,
            &[
                (Section::Home, 0.0, 400.0),
                (Section::About, 400.0, 400.0),
                (Section::Projects, 800.0, 800.0),
                (Section::Skills, 1_600.0, 1_200.0),
                (Section::Contact, 2_800.0, 1_000.0),
            ],
        )
    }

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(SectionRegistry::default(), DEFAULT_ACTIVE_LOOKAHEAD_PX)
    }

    fn metrics(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top,
            scroll_height,
            viewport_height,
        }
    }

    #[test]
    fn progress_spans_zero_to_hundred() {
        assert_eq!(progress_percent(metrics(0.0, 3_000.0, 1_000.0)), 0.0);
        assert_eq!(progress_percent(metrics(1_000.0, 3_000.0, 1_000.0)), 50.0);
        assert_eq!(progress_percent(metrics(2_000.0, 3_000.0, 1_000.0)), 100.0);

        for step in 0..=20 {
            let scroll_top = step as f64 * 100.0;
            let value = progress_percent(metrics(scroll_top, 3_000.0, 1_000.0));
            assert!((value - scroll_top / 2_000.0 * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn progress_is_clamped_for_overscroll() {
        assert_eq!(progress_percent(metrics(-40.0, 3_000.0, 1_000.0)), 0.0);
        assert_eq!(progress_percent(metrics(2_300.0, 3_000.0, 1_000.0)), 100.0);
    }

    #[test]
    fn degenerate_geometry_reports_zero_progress() {
        assert_eq!(progress_percent(metrics(0.0, 700.0, 900.0)), 0.0);
        assert_eq!(progress_percent(metrics(50.0, 900.0, 900.0)), 0.0);
        assert_eq!(progress_percent(metrics(f64::NAN, 2_000.0, 900.0)), 0.0);
    }

    #[test]
    fn lookahead_selects_projects_at_900() {
        let layout = standard_page();
        let mut state = ScrollState::default();

        layout.scroll_to(900.0);
        assert!(tracker().recompute(&mut state, &layout));

        assert_eq!(state.active_section, Section::Projects);
        assert!((state.progress_percent - 30.0).abs() < 1e-9);
    }

    #[test]
    fn lookahead_crosses_boundary_early() {
        let layout = standard_page();
        let mut state = ScrollState::default();

        layout.scroll_to(700.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::Projects);

        layout.scroll_to(699.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn overlapping_sections_report_earlier_one() {
        let layout = FakeLayout::with_sections(
            3_000.0,
            800.0,
            &[(Section::About, 0.0, 1_000.0), (Section::Projects, 500.0, 1_000.0)],
        );
        let mut state = ScrollState::default();

        layout.scroll_to(600.0);
        tracker().recompute(&mut state, &layout);

        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn unmatched_scan_keeps_previous_active_section() {
        let layout = FakeLayout::with_sections(5_000.0, 800.0, &[(Section::About, 0.0, 500.0)]);
        let mut state = ScrollState::default();

        layout.scroll_to(100.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::About);

        layout.scroll_to(3_000.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn unmounted_sections_are_skipped() {
        let layout = standard_page();
        layout.unmount(Section::Projects);
        let mut state = ScrollState {
            active_section: Section::About,
            ..ScrollState::default()
        };

        layout.scroll_to(900.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::About);

        layout.scroll_to(1_700.0);
        tracker().recompute(&mut state, &layout);
        assert_eq!(state.active_section, Section::Skills);
    }

    #[test]
    fn transition_pins_active_section_but_tracks_progress() {
        let layout = standard_page();
        let mut state = ScrollState {
            active_section: Section::Contact,
            is_transitioning: true,
            ..ScrollState::default()
        };

        layout.scroll_to(1_500.0);
        assert!(tracker().recompute(&mut state, &layout));

        assert_eq!(state.active_section, Section::Contact);
        assert!((state.progress_percent - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unchanged_position_reports_no_change() {
        let layout = standard_page();
        let mut state = ScrollState::default();

        layout.scroll_to(900.0);
        tracker().recompute(&mut state, &layout);
        assert!(!tracker().recompute(&mut state, &layout));
    }
}

pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.2;

// Observers report ratios a hair under the configured threshold at the
// crossing point.
const THRESHOLD_TOLERANCE: f64 = 0.001;

// Keeps a capped threshold strictly reachable for elements taller than the
// viewport.
const REACHABLE_MARGIN: f64 = 0.9;

/// Caps `threshold` at the largest ratio an element `element_height` tall
/// can reach inside a `viewport_height` viewport.
pub fn reachable_threshold(threshold: f64, element_height: f64, viewport_height: f64) -> f64 {
    if !(element_height > 0.0 && viewport_height > 0.0) {
        return threshold;
    }

    let ceiling = viewport_height / element_height;
    if ceiling < threshold {
        ceiling * REACHABLE_MARGIN
    } else {
        threshold
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VisibilityPolicy {
    /// Turns on at first intersection and stays on.
    OneShot,
    /// Follows the element in and out of the viewport.
    Toggling,
}

#[derive(Clone, PartialEq, Debug)]
pub struct VisibilityFlag {
    policy: VisibilityPolicy,
    threshold: f64,
    visible: bool,
}

impl VisibilityFlag {
    pub fn new(policy: VisibilityPolicy, threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_VISIBILITY_THRESHOLD
        };

        Self {
            policy,
            threshold,
            visible: false,
        }
    }

    pub fn policy(&self) -> VisibilityPolicy {
        self.policy
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns whether the flag changed.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        let entered = is_intersecting && ratio + THRESHOLD_TOLERANCE >= self.threshold;

        let next = match self.policy {
            VisibilityPolicy::OneShot => self.visible || entered,
            VisibilityPolicy::Toggling => entered,
        };

        let changed = next != self.visible;
        self.visible = next;
        changed
    }

    /// Fallback for viewports where intersection reports arrive late.
    pub fn force_visible(&mut self) -> bool {
        let changed = !self.visible;
        self.visible = true;
        changed
    }

    /// Whether the narrow-viewport fallback timer should be armed.
    pub fn wants_fallback(&self, viewport_width: f64, narrow_viewport_px: f64) -> bool {
        !self.visible && viewport_width < narrow_viewport_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_never_resets() {
        let mut flag = VisibilityFlag::new(VisibilityPolicy::OneShot, DEFAULT_VISIBILITY_THRESHOLD);
        let reports = [
            (false, 0.0),
            (true, 0.05),
            (true, 0.35),
            (false, 0.0),
            (true, 0.1),
            (false, 0.0),
        ];

        let mut seen_visible = false;
        for (intersecting, ratio) in reports {
            flag.observe(intersecting, ratio);
            if seen_visible {
                assert!(flag.is_visible(), "one-shot flag reset after becoming visible");
            }
            seen_visible |= flag.is_visible();
        }

        assert!(seen_visible);
    }

    #[test]
    fn toggling_follows_viewport() {
        let mut flag = VisibilityFlag::new(VisibilityPolicy::Toggling, DEFAULT_VISIBILITY_THRESHOLD);

        assert!(flag.observe(true, 0.2));
        assert!(flag.is_visible());
        assert!(flag.observe(false, 0.0));
        assert!(!flag.is_visible());
        assert!(!flag.observe(true, 0.1));
        assert!(flag.observe(true, 0.6));
    }

    #[test]
    fn crossing_ratio_just_under_threshold_counts() {
        let mut flag = VisibilityFlag::new(VisibilityPolicy::OneShot, 0.2);
        assert!(flag.observe(true, 0.1995));
    }

    #[test]
    fn fallback_only_for_hidden_narrow_viewports() {
        let mut flag = VisibilityFlag::new(VisibilityPolicy::OneShot, 0.2);

        assert!(flag.wants_fallback(390.0, 768.0));
        assert!(!flag.wants_fallback(1_280.0, 768.0));

        assert!(flag.force_visible());
        assert!(!flag.force_visible());
        assert!(!flag.wants_fallback(390.0, 768.0));
    }

    #[test]
    fn section_taller_than_five_viewports_still_reveals() {
        let viewport = 800.0;
        let section = 6.0 * viewport;
        let threshold = reachable_threshold(DEFAULT_VISIBILITY_THRESHOLD, section, viewport);
        assert!(threshold < viewport / section);

        let mut flag = VisibilityFlag::new(VisibilityPolicy::OneShot, threshold);
        // Fully covering the viewport is the best this section can do.
        assert!(flag.observe(true, viewport / section));
        assert!(flag.is_visible());
    }

    #[test]
    fn reachable_threshold_keeps_configured_value_when_it_fits() {
        assert_eq!(reachable_threshold(0.2, 900.0, 800.0), 0.2);
        assert_eq!(reachable_threshold(0.2, 0.0, 800.0), 0.2);
        assert_eq!(reachable_threshold(0.2, 600.0, 0.0), 0.2);
    }

    #[test]
    fn invalid_threshold_uses_default() {
        assert_eq!(
            VisibilityFlag::new(VisibilityPolicy::OneShot, f64::NAN).threshold(),
            DEFAULT_VISIBILITY_THRESHOLD
        );
        assert_eq!(VisibilityFlag::new(VisibilityPolicy::OneShot, 3.0).threshold(), 1.0);
    }
}

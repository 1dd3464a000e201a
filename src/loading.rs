use std::time::Duration;

pub const LOADING_TICK: Duration = Duration::from_millis(150);
pub const EXIT_DELAY: Duration = Duration::from_millis(300);
pub const EXIT_DURATION: Duration = Duration::from_millis(500);

const MIN_STEP: f64 = 10.0;
const STEP_SPREAD: f64 = 20.0;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoadingPhase {
    Loading,
    /// Progress reached 100; waiting out [`EXIT_DELAY`].
    Complete,
    Exiting,
    Done,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct LoadingScreen {
    progress: f64,
    phase: LoadingPhase,
}

impl Default for LoadingScreen {
    fn default() -> Self {
        Self {
            progress: 0.0,
            phase: LoadingPhase::Loading,
        }
    }
}

impl LoadingScreen {
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> LoadingPhase {
        self.phase
    }

    pub fn rounded_percent(&self) -> u32 {
        self.progress.round() as u32
    }

    /// One interval tick; `unit` is a uniform sample in `[0, 1)`. The tick
    /// after progress hits 100 completes loading and stops the interval.
    pub fn tick(&mut self, unit: f64) -> LoadingPhase {
        if self.phase != LoadingPhase::Loading {
            return self.phase;
        }

        if self.progress >= 100.0 {
            self.phase = LoadingPhase::Complete;
            return self.phase;
        }

        let unit = if unit.is_finite() { unit.clamp(0.0, 1.0) } else { 0.0 };
        self.progress = (self.progress + unit * STEP_SPREAD + MIN_STEP).min(100.0);
        self.phase
    }

    pub fn start_exit(&mut self) {
        if self.phase == LoadingPhase::Complete {
            self.phase = LoadingPhase::Exiting;
        }
    }

    pub fn finish(&mut self) {
        if self.phase == LoadingPhase::Exiting {
            self.phase = LoadingPhase::Done;
        }
    }

    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, LoadingPhase::Exiting | LoadingPhase::Done)
    }

    pub fn is_done(&self) -> bool {
        self.phase == LoadingPhase::Done
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slowest_progress_completes_on_eleventh_tick() {
        let mut screen = LoadingScreen::default();
        let mut ticks = 0;

        while screen.tick(0.0) == LoadingPhase::Loading {
            ticks += 1;
            assert!(screen.progress() <= 100.0);
        }

        assert_eq!(ticks, 10);
        assert_eq!(screen.rounded_percent(), 100);
        assert_eq!(screen.phase(), LoadingPhase::Complete);
    }

    #[test]
    fn exit_runs_only_after_completion() {
        let mut screen = LoadingScreen::default();
        screen.start_exit();
        screen.finish();
        assert_eq!(screen.phase(), LoadingPhase::Loading);

        while screen.tick(0.99) == LoadingPhase::Loading {}
        screen.start_exit();
        assert!(screen.is_exiting());
        assert!(!screen.is_done());

        screen.finish();
        assert!(screen.is_done());
        assert_eq!(screen.tick(0.5), LoadingPhase::Done);
    }
}

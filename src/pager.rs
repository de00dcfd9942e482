use clap::ValueEnum;
use tracing::debug;

pub const DEFAULT_SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Clock,
    #[value(name = "focus")]
    #[strum(to_string = "focus")]
    FocusTimer,
}

/// Two-page selector moved by horizontal swipes
#[derive(Debug, Clone, PartialEq)]
pub struct PageSelector {
    page: Page,
    threshold: f64,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(Page::Clock, DEFAULT_SWIPE_THRESHOLD)
    }
}

impl PageSelector {
    pub fn new(page: Page, threshold: f64) -> Self {
        Self {
            page,
            threshold: threshold.abs(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Apply a finished swipe with horizontal displacement `dx` (negative is
    /// leftward). Returns true if the page changed.
    ///
    /// Leftward past the threshold goes from the clock to the focus timer,
    /// rightward past it comes back. Anything else is ignored.
    pub fn swipe(&mut self, dx: f64) -> bool {
        let next = match self.page {
            Page::Clock if dx < -self.threshold => Page::FocusTimer,
            Page::FocusTimer if dx > self.threshold => Page::Clock,
            _ => return false,
        };

        debug!(from = %self.page, to = %next, dx, "page changed");
        self.page = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_clock() {
        assert_eq!(PageSelector::default().page(), Page::Clock);
    }

    #[test]
    fn left_swipe_past_threshold_opens_focus_timer() {
        let mut pager = PageSelector::default();
        assert!(pager.swipe(-60.0));
        assert_eq!(pager.page(), Page::FocusTimer);
    }

    #[test]
    fn left_swipe_below_threshold_is_ignored() {
        let mut pager = PageSelector::default();
        assert!(!pager.swipe(-40.0));
        assert_eq!(pager.page(), Page::Clock);
    }

    #[test]
    fn threshold_itself_does_not_trigger() {
        let mut pager = PageSelector::default();
        assert!(!pager.swipe(-50.0));
        assert_eq!(pager.page(), Page::Clock);
    }

    #[test]
    fn wrong_direction_is_ignored() {
        let mut pager = PageSelector::default();
        assert!(!pager.swipe(200.0));
        assert_eq!(pager.page(), Page::Clock);

        let mut pager = PageSelector::new(Page::FocusTimer, DEFAULT_SWIPE_THRESHOLD);
        assert!(!pager.swipe(-200.0));
        assert_eq!(pager.page(), Page::FocusTimer);
    }

    #[test]
    fn right_swipe_returns_to_clock() {
        let mut pager = PageSelector::new(Page::FocusTimer, DEFAULT_SWIPE_THRESHOLD);
        assert!(!pager.swipe(30.0));
        assert!(pager.swipe(51.0));
        assert_eq!(pager.page(), Page::Clock);
    }

    #[test]
    fn custom_threshold() {
        let mut pager = PageSelector::new(Page::Clock, 10.0);
        assert!(pager.swipe(-11.0));
    }

    #[test]
    fn page_display_names() {
        assert_eq!(Page::Clock.to_string(), "clock");
        assert_eq!(Page::FocusTimer.to_string(), "focus");
    }
}

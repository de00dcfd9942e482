//! Focus-session stopwatch.
//!
//! A [`TimerSession`] cycles between idle and active for the lifetime of the
//! process. The only way to change it from the outside is [`TimerSession::toggle`],
//! which mirrors the single start/stop button on the focus page.

use std::time::{Duration, Instant};

use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Active,
}

/// Running total of focused time since the process started
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerSession {
    session_start: Option<Instant>,
    accumulated_today: Duration,
    current_session_elapsed: Duration,
}

impl TimerSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.session_start.is_some()
    }

    pub fn state(&self) -> TimerState {
        if self.is_running() {
            TimerState::Active
        } else {
            TimerState::Idle
        }
    }

    pub fn session_start(&self) -> Option<Instant> {
        self.session_start
    }

    pub fn accumulated_today(&self) -> Duration {
        self.accumulated_today
    }

    pub fn current_session_elapsed(&self) -> Duration {
        self.current_session_elapsed
    }

    /// Completed sessions plus the one in progress, as of the last tick.
    pub fn total(&self) -> Duration {
        self.accumulated_today
            .saturating_add(self.current_session_elapsed)
    }

    /// Start a session when idle, stop the running one otherwise.
    /// Returns the state after the transition.
    pub fn toggle(&mut self, now: Instant) -> TimerState {
        if self.is_running() {
            self.stop(now);
        } else {
            self.start(now);
        }
        self.state()
    }

    /// Refresh the elapsed time of the running session. No-op while idle.
    pub fn tick(&mut self, now: Instant) {
        if let Some(start) = self.session_start {
            self.current_session_elapsed = now.saturating_duration_since(start);
        }
    }

    /// Formatted `HH:MM:SS` of [`TimerSession::total`].
    pub fn formatted_total(&self) -> String {
        format_total(self.accumulated_today, self.current_session_elapsed)
    }

    fn start(&mut self, now: Instant) {
        self.session_start = Some(now);
        self.current_session_elapsed = Duration::ZERO;
        info!(accumulated_secs = self.accumulated_today.as_secs(), "focus session started");
    }

    fn stop(&mut self, now: Instant) {
        // a stop without a start must leave everything untouched
        let Some(start) = self.session_start.take() else {
            return;
        };

        let elapsed = now.saturating_duration_since(start);
        self.accumulated_today = self.accumulated_today.saturating_add(elapsed);
        self.current_session_elapsed = Duration::ZERO;
        info!(
            session_secs = elapsed.as_secs(),
            accumulated_secs = self.accumulated_today.as_secs(),
            "focus session stopped"
        );
    }
}

/// Render `accumulated + current` as `HH:MM:SS`, flooring to whole seconds.
///
/// Every field is padded to two digits; the hour field keeps growing past 99
/// instead of wrapping.
pub fn format_total(accumulated: Duration, current: Duration) -> String {
    let total_secs = accumulated.saturating_add(current).as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

use std::cell::Cell;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// One reading of both clocks the app cares about: the monotonic instant the
/// focus timer measures with, and the wall-clock time shown on the clock face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Now {
    pub instant: Instant,
    pub wall: DateTime<Local>,
}

impl Now {
    pub fn new(instant: Instant, wall: DateTime<Local>) -> Self {
        Self { instant, wall }
    }
}

pub trait TimeSource {
    fn now(&self) -> Now;
}

/// Host clocks
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Now {
        Now::new(Instant::now(), Local::now())
    }
}

/// Hand-driven clock for tests and headless runs. Both readings move
/// together on [`ManualTimeSource::advance`].
#[derive(Debug, Clone)]
pub struct ManualTimeSource {
    current: Cell<Now>,
}

impl ManualTimeSource {
    pub fn new(start: Now) -> Self {
        Self {
            current: Cell::new(start),
        }
    }

    pub fn starting_at(wall: DateTime<Local>) -> Self {
        Self::new(Now::new(Instant::now(), wall))
    }

    pub fn advance(&self, by: Duration) {
        let now = self.current.get();
        let wall = chrono::Duration::from_std(by)
            .ok()
            .and_then(|d| now.wall.checked_add_signed(d))
            .unwrap_or(now.wall);
        self.current.set(Now::new(now.instant + by, wall));
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Now {
        self.current.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn manual_source_advances_both_clocks() {
        let wall = Local.with_ymd_and_hms(2024, 3, 5, 9, 0, 0).unwrap();
        let source = ManualTimeSource::starting_at(wall);
        let start = source.now();

        source.advance(Duration::from_secs(90));
        let later = source.now();

        assert_eq!(later.instant - start.instant, Duration::from_secs(90));
        assert_eq!(later.wall - start.wall, chrono::Duration::seconds(90));
    }

    #[test]
    fn manual_source_is_stable_between_advances() {
        let source = ManualTimeSource::starting_at(Local::now());
        assert_eq!(source.now(), source.now());
    }

    #[test]
    fn system_source_moves_forward() {
        let source = SystemTimeSource;
        let a = source.now();
        let b = source.now();
        assert!(b.instant >= a.instant);
    }
}

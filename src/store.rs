//! Single owner of everything the two pages show.
//!
//! State only changes through [`FocusClock::tick`] and [`FocusClock::dispatch`];
//! after each call every subscriber receives a fresh [`Snapshot`]. Renderers
//! read snapshots and send [`Intent`]s back, never touching the state directly.

use tracing::trace;

use crate::clock::ClockFace;
use crate::focus::TimerSession;
use crate::pager::{Page, PageSelector};
use crate::time_source::Now;

pub const START_LABEL: &str = "Start Focus";
pub const STOP_LABEL: &str = "Stop Focus";

/// A user request coming up from the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intent {
    ToggleFocus,
    /// Finished horizontal drag; negative `dx` is leftward
    Swipe { dx: f64 },
}

/// Immutable view of the store handed to renderers and observers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub hour: String,
    pub minute: String,
    pub weekday: String,
    pub day_month: String,
    pub total_elapsed_formatted: String,
    pub running: bool,
    pub page: Page,
}

impl Snapshot {
    pub fn button_label(&self) -> &'static str {
        if self.running {
            STOP_LABEL
        } else {
            START_LABEL
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Snapshot)>;

pub struct FocusClock {
    timer: TimerSession,
    pager: PageSelector,
    face: ClockFace,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for FocusClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusClock")
            .field("timer", &self.timer)
            .field("pager", &self.pager)
            .field("face", &self.face)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl FocusClock {
    pub fn new(pager: PageSelector, now: Now) -> Self {
        Self {
            timer: TimerSession::new(),
            pager,
            face: ClockFace::at(&now.wall),
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn timer(&self) -> &TimerSession {
        &self.timer
    }

    pub fn page(&self) -> Page {
        self.pager.page()
    }

    /// Periodic refresh: re-sample the clock face and, if a session is
    /// running, its elapsed time.
    pub fn tick(&mut self, now: Now) {
        self.face = ClockFace::at(&now.wall);
        self.timer.tick(now.instant);
        trace!(total = %self.timer.formatted_total(), "tick");
        self.notify();
    }

    pub fn dispatch(&mut self, intent: Intent, now: Now) {
        match intent {
            Intent::ToggleFocus => {
                self.timer.toggle(now.instant);
            }
            Intent::Swipe { dx } => {
                self.pager.swipe(dx);
            }
        }
        self.notify();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            hour: self.face.hour.clone(),
            minute: self.face.minute.clone(),
            weekday: self.face.weekday.clone(),
            day_month: self.face.day_month.clone(),
            total_elapsed_formatted: self.timer.formatted_total(),
            running: self.timer.is_running(),
            page: self.pager.page(),
        }
    }

    /// Observers run in registration order after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&Snapshot) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, observer) in self.observers.iter_mut() {
            observer(&snapshot);
        }
    }
}

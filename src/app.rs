use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tracing::debug;

use crate::config::Config;
use crate::input::{Action, InputMapper};
use crate::pager::{Page, PageSelector};
use crate::runtime::AppEvent;
use crate::store::{FocusClock, Snapshot};
use crate::time_source::TimeSource;
use crate::ui::Theme;

const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Effective runtime settings after merging the config file and CLI flags
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub tick_interval: Duration,
    pub swipe_threshold: f64,
    pub drag_units_per_column: f64,
    pub accent_rgb: [u8; 3],
    pub initial_page: Page,
}

impl Settings {
    pub fn from_config(cfg: &Config, initial_page: Page) -> Self {
        let cfg = cfg.clone().sanitized();
        Self {
            tick_interval: Duration::from_millis(cfg.tick_interval_ms.max(MIN_TICK_INTERVAL_MS)),
            swipe_threshold: cfg.swipe_threshold,
            drag_units_per_column: cfg.drag_units_per_column,
            accent_rgb: cfg.accent_rgb,
            initial_page,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default(), Page::Clock)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Wires the store to terminal input and a time source. Redraws are driven
/// by the store's change notifications.
pub struct App<S: TimeSource> {
    store: FocusClock,
    input: InputMapper,
    theme: Theme,
    time: S,
    dirty: Rc<Cell<bool>>,
}

impl<S: TimeSource> App<S> {
    pub fn new(settings: &Settings, time: S) -> Self {
        let pager = PageSelector::new(settings.initial_page, settings.swipe_threshold);
        let mut store = FocusClock::new(pager, time.now());

        let dirty = Rc::new(Cell::new(true));
        let flag = Rc::clone(&dirty);
        store.subscribe(move |_| flag.set(true));

        Self {
            store,
            input: InputMapper::new(settings.swipe_threshold, settings.drag_units_per_column),
            theme: Theme::from_rgb(settings.accent_rgb),
            time,
            dirty,
        }
    }

    pub fn handle(&mut self, event: AppEvent) -> Flow {
        let action = match event {
            AppEvent::Tick => {
                self.store.tick(self.time.now());
                return Flow::Continue;
            }
            AppEvent::Resize => {
                self.dirty.set(true);
                return Flow::Continue;
            }
            AppEvent::Key(key) => self.input.on_key(key, self.store.page()),
            AppEvent::Mouse(mouse) => self.input.on_mouse(mouse),
        };

        match action {
            Action::Quit => Flow::Quit,
            Action::Intent(intent) => {
                debug!(?intent, "dispatch");
                self.store.dispatch(intent, self.time.now());
                Flow::Continue
            }
            Action::Ignore => Flow::Continue,
        }
    }

    /// True once after anything visible changed.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.store.snapshot()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn store(&self) -> &FocusClock {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut FocusClock {
        &mut self.store
    }

    pub fn time(&self) -> &S {
        &self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_source::ManualTimeSource;
    use chrono::{Local, TimeZone};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn app() -> App<ManualTimeSource> {
        let wall = Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        App::new(&Settings::default(), ManualTimeSource::starting_at(wall))
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn settings_clamp_tick_interval() {
        let cfg = Config {
            tick_interval_ms: 0,
            ..Config::default()
        };
        let settings = Settings::from_config(&cfg, Page::Clock);
        assert_eq!(settings.tick_interval, Duration::from_millis(MIN_TICK_INTERVAL_MS));
    }

    #[test]
    fn nan_threshold_still_lets_arrow_keys_change_page() {
        let cfg = Config {
            swipe_threshold: f64::NAN,
            drag_units_per_column: -4.0,
            ..Config::default()
        };
        let settings = Settings::from_config(&cfg, Page::Clock);
        assert_eq!(settings.swipe_threshold, crate::pager::DEFAULT_SWIPE_THRESHOLD);
        assert!(settings.drag_units_per_column > 0.0);

        let wall = Local.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        let mut app = App::new(&settings, ManualTimeSource::starting_at(wall));
        app.handle(key(KeyCode::Right));
        assert_eq!(app.snapshot().page, Page::FocusTimer);
    }

    #[test]
    fn first_frame_is_dirty() {
        let app = app();
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
    }

    #[test]
    fn space_on_clock_page_does_not_start_a_session() {
        let mut app = app();
        app.take_dirty();
        assert_eq!(app.handle(key(KeyCode::Char(' '))), Flow::Continue);
        assert!(!app.snapshot().running);
        assert!(!app.take_dirty());
    }

    #[test]
    fn swipe_then_toggle_then_tick() {
        let mut app = app();
        app.handle(key(KeyCode::Right));
        assert_eq!(app.snapshot().page, Page::FocusTimer);

        app.handle(key(KeyCode::Char(' ')));
        assert!(app.snapshot().running);

        app.time().advance(Duration::from_secs(42));
        app.take_dirty();
        app.handle(AppEvent::Tick);
        assert!(app.take_dirty());
        assert_eq!(app.snapshot().total_elapsed_formatted, "00:00:42");
    }

    #[test]
    fn resize_marks_dirty() {
        let mut app = app();
        app.take_dirty();
        app.handle(AppEvent::Resize);
        assert!(app.take_dirty());
    }

    #[test]
    fn escape_quits() {
        let mut app = app();
        assert_eq!(app.handle(key(KeyCode::Esc)), Flow::Quit);
    }
}

//! Maps raw terminal input onto the store's intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::pager::Page;
use crate::store::Intent;

/// What the event loop should do with a piece of input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Intent(Intent),
    Quit,
    Ignore,
}

#[derive(Debug, Clone)]
pub struct InputMapper {
    swipe_threshold: f64,
    drag_units_per_column: f64,
    drag_origin: Option<u16>,
}

impl InputMapper {
    pub fn new(swipe_threshold: f64, drag_units_per_column: f64) -> Self {
        Self {
            swipe_threshold: swipe_threshold.abs(),
            drag_units_per_column,
            drag_origin: None,
        }
    }

    fn key_swipe(&self, leftward: bool) -> Action {
        // comfortably past the threshold so a key press always counts
        let dx = self.swipe_threshold * 2.0 + 1.0;
        Action::Intent(Intent::Swipe {
            dx: if leftward { -dx } else { dx },
        })
    }

    pub fn on_key(&self, key: KeyEvent, page: Page) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            // the button only exists on the focus page
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => match page {
                Page::FocusTimer => Action::Intent(Intent::ToggleFocus),
                Page::Clock => Action::Ignore,
            },
            KeyCode::Right | KeyCode::Char('l') => self.key_swipe(true),
            KeyCode::Left | KeyCode::Char('h') => self.key_swipe(false),
            _ => Action::Ignore,
        }
    }

    /// Turns a left-button press/release pair into a swipe.
    pub fn on_mouse(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.drag_origin = Some(mouse.column);
                Action::Ignore
            }
            MouseEventKind::Up(MouseButton::Left) => match self.drag_origin.take() {
                Some(origin) => {
                    let columns = f64::from(mouse.column) - f64::from(origin);
                    Action::Intent(Intent::Swipe {
                        dx: columns * self.drag_units_per_column,
                    })
                }
                None => Action::Ignore,
            },
            _ => Action::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn quit_keys() {
        let mapper = InputMapper::new(50.0, 4.0);
        assert_eq!(mapper.on_key(key(KeyCode::Esc), Page::Clock), Action::Quit);
        assert_eq!(mapper.on_key(key(KeyCode::Char('q')), Page::FocusTimer), Action::Quit);
        assert_eq!(
            mapper.on_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Page::Clock
            ),
            Action::Quit
        );
    }

    #[test]
    fn toggle_only_on_focus_page() {
        let mapper = InputMapper::new(50.0, 4.0);
        assert_eq!(
            mapper.on_key(key(KeyCode::Char(' ')), Page::FocusTimer),
            Action::Intent(Intent::ToggleFocus)
        );
        assert_eq!(
            mapper.on_key(key(KeyCode::Enter), Page::FocusTimer),
            Action::Intent(Intent::ToggleFocus)
        );
        assert_eq!(mapper.on_key(key(KeyCode::Char(' ')), Page::Clock), Action::Ignore);
    }

    #[test]
    fn arrow_keys_cross_the_threshold() {
        let mapper = InputMapper::new(50.0, 4.0);
        assert_matches!(
            mapper.on_key(key(KeyCode::Right), Page::Clock),
            Action::Intent(Intent::Swipe { dx }) if dx < -50.0
        );
        assert_matches!(
            mapper.on_key(key(KeyCode::Char('h')), Page::FocusTimer),
            Action::Intent(Intent::Swipe { dx }) if dx > 50.0
        );
    }

    #[test]
    fn mouse_drag_becomes_swipe() {
        let mut mapper = InputMapper::new(50.0, 4.0);
        assert_eq!(
            mapper.on_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 40)),
            Action::Ignore
        );
        assert_eq!(
            mapper.on_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 30)),
            Action::Ignore
        );
        assert_eq!(
            mapper.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 25)),
            Action::Intent(Intent::Swipe { dx: -60.0 })
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut mapper = InputMapper::new(50.0, 4.0);
        assert_eq!(
            mapper.on_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 25)),
            Action::Ignore
        );
    }
}

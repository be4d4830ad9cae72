//! Key mapping for the terminal front-end.
//!
//! Menus and the running session read the keyboard differently, so keys are
//! translated per context before they reach [`crate::app::App`].

use crossterm::event::{KeyCode, KeyEvent};
use flappy::interfaces::InputEvent;

/// Navigation intent on a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Select,
    Back,
}

pub fn menu_key(key: KeyEvent) -> Option<MenuKey> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(MenuKey::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(MenuKey::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(MenuKey::Select),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuKey::Back),
        _ => None,
    }
}

/// Keys while the bird is on screen (welcome prompt or playing).
pub fn play_key(key: KeyEvent) -> Option<InputEvent> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(InputEvent::Flap),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(InputEvent::PauseToggle),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}

/// Move a menu cursor with wrap-around.
pub fn step_cursor(cursor: usize, len: usize, key: MenuKey) -> usize {
    if len == 0 {
        return 0;
    }
    match key {
        MenuKey::Up => (cursor + len - 1) % len,
        MenuKey::Down => (cursor + 1) % len,
        MenuKey::Select | MenuKey::Back => cursor,
    }
}

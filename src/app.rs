//! Front-end state: which screen is up, menu cursors, and the session.

use crate::input::{menu_key, play_key, step_cursor, MenuKey};
use crossterm::event::KeyEvent;
use flappy::core::FlappyError;
use flappy::game::{Difficulty, Phase, Session, TickOutcome};
use flappy::interfaces::QueuedInput;
use rand::rngs::StdRng;

pub const MAIN_MENU: [&str; 2] = ["Play", "Exit"];
pub const DIFFICULTY_MENU: [&str; 4] = ["Easy", "Medium", "Hard", "Back"];
pub const GAME_OVER_MENU: [&str; 3] = ["Restart", "Main Menu", "Exit"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    DifficultySelect,
    /// Welcome prompt, play and the game-over overlay.
    Session,
}

pub struct App {
    pub screen: Screen,
    pub main_cursor: usize,
    pub difficulty_cursor: usize,
    pub game_over_cursor: usize,
    pub session: Session<StdRng>,
    input: QueuedInput,
    pub should_quit: bool,
}

impl App {
    /// `input` must be the queue the session was built with.
    pub fn new(session: Session<StdRng>, input: QueuedInput) -> Self {
        Self {
            screen: Screen::MainMenu,
            main_cursor: 0,
            difficulty_cursor: 0,
            game_over_cursor: 0,
            session,
            input,
            should_quit: false,
        }
    }

    /// Skip the menus and go straight to the welcome prompt.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Result<Self, FlappyError> {
        self.session.set_difficulty(difficulty)?;
        self.difficulty_cursor = Difficulty::ALL
            .iter()
            .position(|d| *d == difficulty)
            .unwrap_or(0);
        self.screen = Screen::Session;
        Ok(self)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), FlappyError> {
        match self.screen {
            Screen::MainMenu => self.handle_main_menu(key),
            Screen::DifficultySelect => self.handle_difficulty_menu(key)?,
            Screen::Session if self.session.phase() == Phase::GameOver => {
                self.handle_game_over(key)?
            }
            Screen::Session => {
                if let Some(event) = play_key(key) {
                    self.input.push(event);
                }
            }
        }
        Ok(())
    }

    /// One fixed tick. The session only runs while its screen is up.
    pub fn on_tick(&mut self) {
        if self.screen != Screen::Session {
            return;
        }
        match self.session.tick() {
            TickOutcome::QuitRequested => self.should_quit = true,
            TickOutcome::GameOver(_) => {
                self.game_over_cursor = 0;
                self.input.clear();
            }
            _ => {}
        }
    }

    fn handle_main_menu(&mut self, key: KeyEvent) {
        let Some(key) = menu_key(key) else {
            return;
        };
        match key {
            MenuKey::Up | MenuKey::Down => {
                self.main_cursor = step_cursor(self.main_cursor, MAIN_MENU.len(), key);
            }
            MenuKey::Select if self.main_cursor == 0 => {
                self.screen = Screen::DifficultySelect;
            }
            MenuKey::Select | MenuKey::Back => self.should_quit = true,
        }
    }

    fn handle_difficulty_menu(&mut self, key: KeyEvent) -> Result<(), FlappyError> {
        let Some(key) = menu_key(key) else {
            return Ok(());
        };
        match key {
            MenuKey::Up | MenuKey::Down => {
                self.difficulty_cursor =
                    step_cursor(self.difficulty_cursor, DIFFICULTY_MENU.len(), key);
            }
            MenuKey::Select if self.difficulty_cursor < Difficulty::ALL.len() => {
                let difficulty = Difficulty::from_index(self.difficulty_cursor)?;
                self.session.set_difficulty(difficulty)?;
                self.input.clear();
                self.screen = Screen::Session;
            }
            MenuKey::Select | MenuKey::Back => self.screen = Screen::MainMenu,
        }
        Ok(())
    }

    fn handle_game_over(&mut self, key: KeyEvent) -> Result<(), FlappyError> {
        let Some(key) = menu_key(key) else {
            return Ok(());
        };
        match key {
            MenuKey::Up | MenuKey::Down => {
                self.game_over_cursor = step_cursor(self.game_over_cursor, GAME_OVER_MENU.len(), key);
            }
            MenuKey::Select => match self.game_over_cursor {
                0 => self.session.restart()?,
                1 => {
                    self.session.return_to_welcome()?;
                    self.screen = Screen::MainMenu;
                }
                _ => self.should_quit = true,
            },
            MenuKey::Back => self.should_quit = true,
        }
        Ok(())
    }
}

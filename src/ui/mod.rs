pub mod game_common;
pub mod menu_scene;
pub mod play_scene;

use crate::app::{App, Screen};
use ratatui::Frame;

/// Draw whichever screen is up.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();
    match app.screen {
        Screen::MainMenu => menu_scene::render_main_menu(
            frame,
            area,
            app.main_cursor,
            app.session.state().high_score,
        ),
        Screen::DifficultySelect => menu_scene::render_difficulty_select(
            frame,
            area,
            app.difficulty_cursor,
            app.session.config(),
        ),
        Screen::Session => {
            play_scene::render_session(frame, area, &app.session.snapshot(), app.game_over_cursor)
        }
    }
}

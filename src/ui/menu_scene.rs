//! Main menu and difficulty select.

use super::game_common::{menu_lines, render_status_bar};
use crate::app::{DIFFICULTY_MENU, MAIN_MENU};
use flappy::core::GameConfig;
use flappy::game::Difficulty;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE_ART: [&str; 5] = [
    r" _____ _                         ",
    r"|  ___| | __ _ _ __  _ __  _   _ ",
    r"| |_  | |/ _` | '_ \| '_ \| | | |",
    r"|  _| | | (_| | |_) | |_) | |_| |",
    r"|_|   |_|\__,_| .__/| .__/ \__, |",
];

pub fn render_main_menu(frame: &mut Frame, area: Rect, cursor: usize, high_score: u32) {
    let body = render_frame(frame, area, " Flappy ");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_ART.len() as u16 + 1),
            Constraint::Length(2),
            Constraint::Length(MAIN_MENU.len() as u16),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(body);

    let title: Vec<Line> = TITLE_ART
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(Color::Yellow))))
        .collect();
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);

    let best = Paragraph::new(format!("High score: {}", high_score))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(best, chunks[1]);

    frame.render_widget(
        Paragraph::new(menu_lines(&MAIN_MENU, cursor)).alignment(Alignment::Center),
        chunks[2],
    );

    render_status_bar(
        frame,
        chunks[4],
        "",
        Color::White,
        &[("[↑/↓]", "Navigate"), ("[Enter]", "Select"), ("[Esc]", "Quit")],
    );
}

pub fn render_difficulty_select(frame: &mut Frame, area: Rect, cursor: usize, config: &GameConfig) {
    let body = render_frame(frame, area, " Select Difficulty ");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(DIFFICULTY_MENU.len() as u16),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(body);

    frame.render_widget(
        Paragraph::new(menu_lines(&DIFFICULTY_MENU, cursor)).alignment(Alignment::Center),
        chunks[1],
    );

    // Describe the highlighted level
    if let Ok(difficulty) = Difficulty::from_index(cursor) {
        let detail = Line::from(vec![
            Span::styled(
                format!("{}: ", difficulty.name()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "gap {:.0}, speed {:.0}",
                    difficulty.gap_offset(config.screen_height),
                    -difficulty.pipe_velocity()
                ),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(detail).alignment(Alignment::Center), chunks[3]);
    }

    render_status_bar(
        frame,
        chunks[5],
        "",
        Color::White,
        &[("[↑/↓]", "Navigate"), ("[Enter]", "Select"), ("[Esc]", "Back")],
    );
}

fn render_frame(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

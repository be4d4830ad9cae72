//! UI rendering for a session: welcome prompt, playfield, HUD and overlays.

use super::game_common::{
    create_game_layout, menu_lines, render_info_panel_frame, render_modal, render_status_bar,
};
use crate::app::GAME_OVER_MENU;
use flappy::core::GameConfig;
use flappy::game::{GameOverSummary, ObstacleTrack, Phase, PlayerState, Snapshot};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PLAY_CONTROLS: [(&str, &str); 3] = [
    ("[Space/Up/Enter]", "Flap"),
    ("[P]", "Pause"),
    ("[Esc/Q]", "Quit"),
];

/// Render the session screen.
pub fn render_session(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>, game_over_cursor: usize) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, 22);
    let state = snapshot.state;

    // The welcome screen shows the bird parked at its spawn point.
    let parked = PlayerState::spawn(snapshot.config);
    let player = snapshot.player.unwrap_or(&parked);
    render_play_area(frame, layout.content, snapshot.config, player, snapshot.track);

    match state.phase {
        Phase::Welcome => render_status_bar(
            frame,
            layout.status_bar,
            "Press Space to start!",
            Color::Yellow,
            &PLAY_CONTROLS,
        ),
        Phase::Playing => render_status_bar(
            frame,
            layout.status_bar,
            &format!("Score: {}   HS: {}   P to pause", state.score, state.high_score),
            Color::Green,
            &PLAY_CONTROLS,
        ),
        Phase::GameOver => render_status_bar(
            frame,
            layout.status_bar,
            "Game over",
            Color::Red,
            &[("[↑/↓]", "Navigate"), ("[Enter]", "Select")],
        ),
    }

    render_info_panel(frame, layout.info_panel, snapshot);

    if state.phase == Phase::Welcome {
        render_welcome(frame, layout.content);
    } else if state.phase == Phase::Playing && state.paused {
        render_paused(frame, layout.content);
    } else if let Some(summary) = snapshot.summary {
        render_game_over(frame, layout.content, summary, game_over_cursor);
    }
}

/// One terminal cell of the playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Cell {
    Sky,
    Pipe,
    GapEdge,
    Ground,
}

/// Scale the world onto `width` x `height` cells. Rows cover the full screen
/// height so the ground band stays visible.
fn rasterize(config: &GameConfig, track: Option<&ObstacleTrack>, width: usize, height: usize) -> Vec<Vec<Cell>> {
    let x_scale = width as f64 / config.screen_width;
    let y_scale = height as f64 / config.screen_height;
    let ground_y = config.ground_y();

    (0..height)
        .map(|row| {
            let world_y = (row as f64 + 0.5) / y_scale;
            (0..width)
                .map(|col| {
                    let world_x = (col as f64 + 0.5) / x_scale;
                    if world_y >= ground_y {
                        return Cell::Ground;
                    }
                    let pipe = track.and_then(|track| {
                        track
                            .iter()
                            .find(|pair| world_x >= pair.x && world_x < pair.right_edge())
                    });
                    match pipe {
                        Some(pair) if world_y < pair.gap_top_y || world_y > pair.gap_bottom_y => {
                            Cell::Pipe
                        }
                        Some(pair)
                            if (world_y - pair.gap_top_y) < 1.0 / y_scale
                                || (pair.gap_bottom_y - world_y) < 1.0 / y_scale =>
                        {
                            Cell::GapEdge
                        }
                        _ => Cell::Sky,
                    }
                })
                .collect()
        })
        .collect()
}

/// Render the playfield with bird, pipes and ground.
fn render_play_area(
    frame: &mut Frame,
    area: Rect,
    config: &GameConfig,
    player: &PlayerState,
    track: Option<&ObstacleTrack>,
) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    let grid = rasterize(config, track, width, height);

    // Bird is drawn as one cell at its center
    let x_scale = width as f64 / config.screen_width;
    let y_scale = height as f64 / config.screen_height;
    let bird_col = ((player.x + config.player_width / 2.0) * x_scale) as usize;
    let bird_row = ((player.y + config.player_height / 2.0).max(0.0) * y_scale) as usize;
    let bird_char = if player.velocity < -0.5 {
        "▲" // Flapping up
    } else if player.velocity > 1.0 {
        "▼" // Falling fast
    } else {
        "►"
    };

    let lines: Vec<Line> = grid
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let spans: Vec<Span> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    if row == bird_row && col == bird_col {
                        return Span::styled(
                            bird_char,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        );
                    }
                    match cell {
                        Cell::Sky => Span::raw(" "),
                        Cell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                        Cell::GapEdge => Span::styled("░", Style::default().fg(Color::DarkGray)),
                        Cell::Ground => Span::styled("▒", Style::default().fg(Color::Rgb(222, 216, 149))),
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Render the info panel on the right.
fn render_info_panel(frame: &mut Frame, area: Rect, snapshot: &Snapshot<'_>) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let state = snapshot.state;
    let label = Style::default().fg(Color::DarkGray);
    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", state.difficulty.name()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" HS: ", label),
            Span::styled(state.high_score.to_string(), Style::default().fg(Color::Yellow)),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(
                format!("{:.0}", state.difficulty.gap_offset(snapshot.config.screen_height)),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Time: ", label),
            Span::styled(
                format!("{:.1}s", state.ticks as f64 / snapshot.config.tick_rate as f64),
                Style::default().fg(Color::White),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_welcome(frame: &mut Frame, area: Rect) {
    let inner = render_modal(frame, area, 30, 5, Color::Yellow);
    let lines = vec![
        Line::from(Span::styled(
            "Get Ready!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Flap to start", Style::default().fg(Color::White))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn render_paused(frame: &mut Frame, area: Rect) {
    let inner = render_modal(frame, area, 26, 5, Color::Cyan);
    let lines = vec![
        Line::from(Span::styled(
            "PAUSED",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Press P to resume", Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Render the game-over overlay.
fn render_game_over(frame: &mut Frame, area: Rect, summary: &GameOverSummary, cursor: usize) {
    let inner = render_modal(frame, area, 34, 13, Color::Red);

    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("You {}.", summary.cause.describe()),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(format!("Score: {}", summary.final_score)),
        Line::from(format!("High Score: {}", summary.high_score)),
    ];
    if summary.new_high_score {
        lines.push(Line::from(Span::styled(
            "New High Score!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(""));
    lines.extend(menu_lines(&GAME_OVER_MENU, cursor));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use flappy::game::PipePair;

    #[test]
    fn test_rasterize_ground_band() {
        let config = GameConfig::default();
        let grid = rasterize(&config, None, 10, 10);
        // Ground starts at 80% of the screen height
        assert!(grid[..8].iter().flatten().all(|cell| *cell == Cell::Sky));
        assert!(grid[8..].iter().flatten().all(|cell| *cell == Cell::Ground));
    }

    #[test]
    fn test_rasterize_pipe_with_gap() {
        let config = GameConfig::default();
        let mut track = ObstacleTrack::default();
        track.push_back(PipePair::new(0.0, 100.0, 300.0, 289.0, 320.0));
        let grid = rasterize(&config, Some(&track), 4, 20);
        // Row 0 is above the gap, row 10 (~ y 268) inside it
        assert_eq!(grid[0][0], Cell::Pipe);
        assert_eq!(grid[10][0], Cell::Sky);
        // Row 14 (~ y 370) is below the gap
        assert_eq!(grid[14][0], Cell::Pipe);
    }
}

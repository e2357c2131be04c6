//! Stateless UI rendering for the terminal surface.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use hotseat_tictactoe::{Marker, PlayerSlot, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Screen regions.
#[derive(Debug, Clone, Copy)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Player names.
    pub players: Rect,
    /// The grid, centered.
    pub grid: Rect,
    /// Result or turn line.
    pub status: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the frame area into regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),           // Title
            Constraint::Length(3),           // Players
            Constraint::Min(GRID_HEIGHT),    // Board
            Constraint::Length(3),           // Status
            Constraint::Length(1),           // Help
        ])
        .split(area);

    ScreenLayout {
        title: chunks[0],
        players: chunks[1],
        grid: center_rect(chunks[2], GRID_WIDTH, GRID_HEIGHT),
        status: chunks[3],
        help: chunks[4],
    }
}

/// Rectangles of the nine cells inside `grid`, row-major.
pub fn cell_rects(grid: Rect) -> [Rect; 9] {
    let mut rects = [Rect::default(); 9];
    for (i, rect) in rects.iter_mut().enumerate() {
        let row = (i / 3) as u16;
        let col = (i % 3) as u16;
        *rect = Rect::new(
            grid.x + col * (CELL_WIDTH + 1),
            grid.y + row * (CELL_HEIGHT + 1),
            CELL_WIDTH,
            CELL_HEIGHT,
        )
        .intersection(grid);
    }
    rects
}

/// Board position under a screen coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let grid = screen_layout(area).grid;
    cell_rects(grid)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());

    let title = Paragraph::new("Hotseat - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_players(frame, layout.players, app);
    draw_grid(frame, layout.grid, app);
    draw_status(frame, layout.status, app);

    let help = Paragraph::new(
        "arrows/1-9 move  enter place  r restart  n/m rename  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn marker_style(marker: Marker) -> Style {
    match marker {
        Marker::X => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        Marker::O => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    }
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let mut spans = Vec::new();

    for slot in [PlayerSlot::One, PlayerSlot::Two] {
        let player = engine.player(slot);
        let name = match app.editing() {
            Some(edit) if edit.slot == slot => format!("{}_", edit.buffer),
            _ => player.name().clone(),
        };

        let mut name_style = Style::default();
        if !engine.is_over() && engine.current_slot() == slot {
            name_style = name_style.add_modifier(Modifier::REVERSED);
        }

        if slot == PlayerSlot::Two {
            spans.push(Span::raw("   vs   "));
        }
        spans.push(Span::styled(player.marker().to_string(), marker_style(player.marker())));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(name, name_style));
    }

    let title = match app.editing() {
        Some(edit) => format!("Renaming {} - enter saves, esc cancels", edit.slot),
        None => "Players".to_string(),
    };

    let players = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(players, area);
}

fn draw_grid(frame: &mut Frame, grid: Rect, app: &App) {
    let separator = Style::default().fg(Color::DarkGray);

    for line in 1..3u16 {
        let y = grid.y + line * (CELL_HEIGHT + 1) - 1;
        let x = grid.x + line * (CELL_WIDTH + 1) - 1;
        let horizontal = Rect::new(grid.x, y, grid.width, 1).intersection(grid);
        let vertical = Rect::new(x, grid.y, 1, grid.height).intersection(grid);
        frame.render_widget(
            Paragraph::new("─".repeat(grid.width as usize)).style(separator),
            horizontal,
        );
        frame.render_widget(
            Paragraph::new(vec![Line::from("│"); grid.height as usize]).style(separator),
            vertical,
        );
    }

    let board = app.surface().board();
    for (i, rect) in cell_rects(grid).into_iter().enumerate() {
        let (symbol, base_style) = match board.get(i) {
            Some(Square::Occupied(marker)) => (marker.to_string(), marker_style(marker)),
            _ => ((i + 1).to_string(), Style::default().fg(Color::DarkGray)),
        };

        let style = if Position::from_index(i) == Some(app.cursor()) {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let cell = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(format!("  {}  ", symbol), style)),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(cell, rect);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.surface().result() {
        Some(result) => (
            format!("{}  (r to play again)", result),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => {
            let player = app.engine().current_player();
            (
                format!("{}'s turn ({})", player.name(), player.marker()),
                Style::default().fg(Color::Yellow),
            )
        }
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_tictactoe::GameEngine;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn started() -> App {
        let mut app = App::new(GameEngine::with_players("Ann".to_string(), "Bo".to_string()));
        app.start();
        app
    }

    #[test]
    fn test_draw_shows_names_and_turn() {
        let text = screen_text(&started());
        assert!(text.contains("Ann"));
        assert!(text.contains("Bo"));
        assert!(text.contains("Ann's turn (X)"));
    }

    #[test]
    fn test_draw_shows_result() {
        let mut app = started();
        for index in [0, 3, 1, 4, 2] {
            app.play(index);
        }
        let text = screen_text(&app);
        assert!(text.contains("Ann wins!"));
    }

    #[test]
    fn test_cell_at_maps_cell_centers() {
        let area = Rect::new(0, 0, 60, 24);
        for (i, rect) in cell_rects(screen_layout(area).grid).iter().enumerate() {
            let hit = cell_at(area, rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(hit, Position::from_index(i));
        }
        assert_eq!(cell_at(area, 0, 0), None);
    }
}

//! Board rendering.

use super::app::App;
use crate::games::tictactoe::{Cell, Mark, Position, rules};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;

/// Draws the whole widget: title, status line, grid and Play Again control.
pub fn render(f: &mut Frame, app: &App) {
    let [title, status, board, play_again, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(CELL_HEIGHT * 3),
        Constraint::Length(3),
        Constraint::Min(1),
    ])
    .areas(f.area());

    f.render_widget(
        Paragraph::new("Tic Tac Toe")
            .style(Style::default().fg(Color::Indexed(54)).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        title,
    );
    f.render_widget(
        Paragraph::new(app.state().status_line())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        status,
    );

    render_board(f, board, app);
    render_play_again(f, play_again, app.state().is_over());

    f.render_widget(
        Paragraph::new("arrows move · enter/space or 1-9 play · r play again · q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        help,
    );
}

fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let grid = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let winning = rules::winning_line(app.state().board()).map(|(_, line)| line);
    let rows = Layout::vertical([Constraint::Length(CELL_HEIGHT); 3]).split(grid);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::horizontal([Constraint::Length(CELL_WIDTH); 3]).split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            let pos = Position::ALL[row * 3 + col];
            let highlighted = winning.is_some_and(|line| line.contains(&pos));
            render_cell(f, *cell_area, app, pos, highlighted);
        }
    }
}

fn render_cell(f: &mut Frame, area: Rect, app: &App, pos: Position, highlighted: bool) {
    let state = app.state();
    let (text, mut style) = match state.board().get(pos) {
        Cell::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => (mark.to_string(), mark_style(mark)),
    };
    if highlighted {
        style = style.bg(Color::Green);
    }

    let mut border = Style::default().fg(Color::Indexed(61));
    if pos == app.cursor() && !state.is_over() {
        border = border.fg(Color::Yellow).add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    f.render_widget(paragraph, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Magenta,
        Mark::O => Color::Blue,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_play_again(f: &mut Frame, area: Rect, game_over: bool) {
    let style = if game_over {
        Style::default()
            .fg(Color::White)
            .bg(Color::Indexed(61))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Indexed(61))
    };
    let button = Paragraph::new(Line::from(" Play Again (r) "))
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, center_rect(area, 20, 3));
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [_, column, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, centered, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(column);
    centered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::GameEngine;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(64, 20)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_numbers() {
        let app = App::new(GameEngine::new());
        let text = screen(&app);
        assert!(text.contains("Next player: X"));
        assert!(text.contains("Play Again"));
        for n in 1..=9 {
            assert!(text.contains(&n.to_string()));
        }
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new(GameEngine::new());
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        let text = screen(&app);
        assert!(text.contains("Winner: X"));
        assert!(text.contains('O'));
    }
}

//! Stateless UI rendering for hotseat tic-tac-toe.

use crate::app::{App, Mode};
use hotseat_tictactoe::{GameView, Position, Square, Symbol};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

const HELP: &str = "arrows/1-9 move, Enter play, r rematch, x/o rename, q quit";

/// Renders the whole screen from the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.session().view();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(24)])
        .split(frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Players
            Constraint::Min(11),   // Board
            Constraint::Length(4), // Status / game over
            Constraint::Length(1), // Help
        ])
        .split(columns[0]);

    let title = Paragraph::new("Hotseat Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_players(frame, chunks[1], app, &view);
    draw_board(frame, chunks[2], &view, app.cursor());
    draw_status(frame, chunks[3], app, &view);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    draw_log(frame, columns[1], &view);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (symbol, area) in Symbol::iter().zip(cols.iter()) {
        let editing = match app.mode() {
            Mode::Editing { symbol: s, buffer } if *s == symbol => Some(buffer.as_str()),
            _ => None,
        };
        let is_active = *view.active() == symbol && !view.is_game_over();

        let border_style = if editing.is_some() {
            Style::default().fg(Color::Green)
        } else if is_active {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let name = editing.unwrap_or_else(|| view.players().name(symbol));
        let prefix = format!("{}  ", symbol);

        let line = Line::from(vec![
            Span::styled(prefix.clone(), symbol_style(symbol)),
            Span::raw(name.to_string()),
        ]);
        let block = Block::default().borders(Borders::ALL).border_style(border_style);
        frame.render_widget(Paragraph::new(line).block(block), *area);

        if let Some(buffer) = editing {
            let offset = u16::try_from(prefix.width() + buffer.width()).unwrap_or(u16::MAX);
            let x = area.x.saturating_add(1).saturating_add(offset);
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}

fn draw_board(frame: &mut Frame, area: Rect, view: &GameView, cursor: Position) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, view, cursor, &Position::ALL[row * 3..row * 3 + 3]);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    positions: &[Position],
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (pos, chunk) in positions.iter().zip([cols[0], cols[2], cols[4]]) {
        draw_cell(frame, chunk, view, cursor, *pos);
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    view: &GameView,
    cursor: Position,
    pos: Position,
) {
    let (symbol, base_style) = match view.board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(mark) => (format!(" {} ", mark), symbol_style(mark)),
    };

    let on_winning_line = view
        .winning_line()
        .as_ref()
        .is_some_and(|line| line.contains(&pos));

    let style = if on_winning_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == cursor && !view.is_game_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center within the 3-line cell.
    let cell = Rect {
        y: area.y + area.height / 2,
        height: area.height.min(1),
        ..area
    };
    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, cell);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let (text, style) = if view.is_game_over() {
        let headline = match view.winner() {
            Some(name) => format!("{} won!", name),
            None => "It's a draw!".to_string(),
        };
        let color = if view.outcome().is_draw() {
            Color::Magenta
        } else {
            Color::Green
        };
        (
            format!("Game Over!\n{}  Press r for a rematch.", headline),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )
    } else {
        let turn = format!(
            "{}'s turn ({})",
            view.players().name(*view.active()),
            view.active()
        );
        (
            format!("{}\n{}", turn, app.status_message()),
            Style::default().fg(Color::Yellow),
        )
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn draw_log(frame: &mut Frame, area: Rect, view: &GameView) {
    let items: Vec<ListItem> = view
        .turns()
        .iter()
        .map(|turn| ListItem::new(turn.to_string()).style(symbol_style(turn.player())))
        .collect();

    let list = List::new(items).block(Block::default().title("Moves").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Blue,
        Symbol::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
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

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{App, DropAnimation};
use super::theme::Theme;
use crate::game::{Board, Cell, GameState, GameStatus, Side, COLS, ROWS};

/// Display name of a side's disc color
pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::First => "Red",
        Side::Second => "Yellow",
    }
}

/// One-line summary of whose turn it is, or how the game ended.
pub fn status_line(state: &GameState) -> String {
    match state.status() {
        GameStatus::Won(side) => format!("{} wins! Press N for a new game.", side_name(side)),
        GameStatus::Drawn => "It's a draw! Press N for a new game.".to_string(),
        GameStatus::InProgress => {
            let side = state.side_to_move();
            if state.is_ai_enabled() {
                let who = if side == state.ai_side() {
                    "Computer"
                } else {
                    "You"
                };
                format!("{}'s turn ({})", side_name(side), who)
            } else {
                format!("{}'s turn (Player {})", side_name(side), side.number())
            }
        }
    }
}

pub fn render(frame: &mut Frame, app: &App) {
    let theme = app.theme();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        frame.area(),
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(ROWS as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, app.game_state(), &theme, chunks[0]);
    render_board(
        frame,
        app.game_state().board(),
        app.selected_column(),
        app.animation(),
        &theme,
        chunks[1],
    );
    render_message(frame, app.message(), &theme, chunks[2]);
    render_controls(frame, app.game_state(), &theme, chunks[3]);
}

fn render_header(frame: &mut Frame, game_state: &GameState, theme: &Theme, area: Rect) {
    let color = match game_state.status() {
        GameStatus::Won(side) => theme.disc(side),
        GameStatus::Drawn => theme.text,
        GameStatus::InProgress => theme.disc(game_state.side_to_move()),
    };

    let header = Paragraph::new(status_line(game_state))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text))
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    animation: Option<&DropAnimation>,
    theme: &Theme,
    area: Rect,
) {
    let board_style = Style::default().bg(theme.board);
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = Vec::new();
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::styled(label, Style::default().fg(theme.text)));
        }
    }
    lines.push(Line::from(col_line));

    // Disc hovering above the board before its first frame
    let mut hover_line = Vec::new();
    for col in 0..COLS {
        match animation {
            Some(anim) if anim.col == col && anim.ghost_row.is_none() => {
                hover_line.push(Span::styled(" ● ", Style::default().fg(theme.disc(anim.side))));
            }
            _ => hover_line.push(Span::raw("   ")),
        }
    }
    lines.push(Line::from(hover_line));

    for row in 0..ROWS {
        let mut row_spans = Vec::new();
        for col in 0..COLS {
            let ghost = animation
                .filter(|anim| anim.col == col && anim.ghost_row == Some(row))
                .map(|anim| anim.side);
            let color = match (board.get(row, col), ghost) {
                (Cell::Occupied(side), _) | (Cell::Empty, Some(side)) => theme.disc(side),
                (Cell::Empty, None) => theme.hole,
            };
            row_spans.push(Span::styled(" ● ", board_style.fg(color)));
        }
        lines.push(Line::from(row_spans));
    }

    // Selection indicator
    let mut indicator_line = Vec::new();
    for col in 0..COLS {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(theme.accent)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, theme: &Theme, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(theme.accent))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.text)),
        );

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, game_state: &GameState, theme: &Theme, area: Rect) {
    let line1 = Line::from("←/→ or 1-7: Select  |  Enter: Drop  |  U: Undo  |  N: New game  |  Q: Quit");
    let mode = if game_state.is_ai_enabled() {
        format!(
            "Computer plays {}",
            side_name(game_state.ai_side())
        )
    } else {
        "Two players".to_string()
    };
    let line2 = Line::from(vec![
        Span::styled(mode, Style::default().fg(theme.accent).add_modifier(Modifier::BOLD)),
        Span::raw("   C: vs computer  S: switch side  T: theme"),
    ]);

    let controls = Paragraph::new(vec![line1, line2])
        .style(Style::default().fg(theme.text))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::AiConfig;

    #[test]
    fn status_for_two_players() {
        let mut state = GameState::initial();
        assert_eq!(status_line(&state), "Red's turn (Player 1)");
        state.apply_move(0).unwrap();
        assert_eq!(status_line(&state), "Yellow's turn (Player 2)");
    }

    #[test]
    fn status_against_computer() {
        let mut state = GameState::with_ai(AiConfig {
            enabled: true,
            side: Side::Second,
        });
        assert_eq!(status_line(&state), "Red's turn (You)");
        state.apply_move(3).unwrap();
        assert_eq!(status_line(&state), "Yellow's turn (Computer)");
    }

    #[test]
    fn status_after_game_over() {
        let mut state = GameState::initial();
        for col in [0, 1, 0, 1, 0, 1, 0] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(status_line(&state), "Red wins! Press N for a new game.");
    }

    #[test]
    fn side_names() {
        assert_eq!(side_name(Side::First), "Red");
        assert_eq!(side_name(Side::Second), "Yellow");
    }
}

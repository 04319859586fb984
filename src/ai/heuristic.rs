//! Rule-based opponent: win if possible, otherwise block, otherwise take the
//! most central open column. No lookahead beyond the next disc.

use tracing::trace;

use super::agent::Agent;
use crate::error::EngineError;
use crate::game::{detector, Board, GameState, Side, COLS};

/// Center-out column order. Central columns sit on more four-in-a-row lines.
pub const PREFERENCE_ORDER: [usize; COLS] = [3, 2, 4, 1, 5, 0, 6];

/// Which rule picked the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Win,
    Block,
    Preference,
    Fallback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub col: usize,
    pub rule: Rule,
}

/// Pick a column for `side`, applying the rules in order.
pub fn decide(board: &Board, side: Side) -> Result<Decision, EngineError> {
    if board.is_full() {
        return Err(EngineError::NoLegalMove);
    }

    let decision = if let Some(col) = winning_column(board, side) {
        Decision { col, rule: Rule::Win }
    } else if let Some(col) = winning_column(board, side.other()) {
        Decision {
            col,
            rule: Rule::Block,
        }
    } else if let Some(&col) = PREFERENCE_ORDER
        .iter()
        .find(|&&col| !board.is_column_full(col))
    {
        Decision {
            col,
            rule: Rule::Preference,
        }
    } else {
        let col = board.legal_columns().next().ok_or(EngineError::NoLegalMove)?;
        Decision {
            col,
            rule: Rule::Fallback,
        }
    };

    trace!(col = decision.col, rule = ?decision.rule, %side, "heuristic decision");
    Ok(decision)
}

/// The heuristic's column for `side`. The board is only read; trial drops
/// happen on a copy.
pub fn choose_column(board: &Board, side: Side) -> Result<usize, EngineError> {
    decide(board, side).map(|decision| decision.col)
}

/// Lowest column where a `side` disc would complete four.
fn winning_column(board: &Board, side: Side) -> Option<usize> {
    board.legal_columns().find(|&col| {
        let mut scratch = *board;
        match scratch.drop_piece(col, side) {
            Ok(row) => detector::completes_line(&scratch, row, col, side),
            Err(_) => false,
        }
    })
}

/// [`Agent`] wrapper around [`choose_column`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicAgent;

impl Agent for HeuristicAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, EngineError> {
        state.choose_column()
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}

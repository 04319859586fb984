use tracing::{debug, info};

use super::{evaluate, Board, Cell, GameStatus, Move, MoveLog, Side, COLS};
use crate::ai::heuristic;
use crate::error::EngineError;

/// Whether the computer plays, and which side it controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AiConfig {
    pub enabled: bool,
    pub side: Side,
}

impl Default for AiConfig {
    fn default() -> Self {
        AiConfig {
            enabled: false,
            side: Side::Second,
        }
    }
}

/// Result of an accepted move, enough for a front-end to animate and redraw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub row: usize,
    pub col: usize,
    pub side: Side,
    pub status: GameStatus,
    pub side_to_move: Side,
}

/// Result of an undo. `reverted` lists the removed moves, most recent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub reverted: Vec<Move>,
    pub status: GameStatus,
    pub side_to_move: Side,
}

/// One game session: board, turn, move log, derived status, and AI settings.
///
/// The state never calls the computer opponent on its own. After each move
/// the caller checks [`GameState::is_ai_turn`] and, if set, drives the next
/// move itself with [`GameState::choose_column`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    history: MoveLog,
    status: GameStatus,
    ai: AiConfig,
}

impl GameState {
    /// Create initial game state, two humans
    pub fn initial() -> Self {
        Self::with_ai(AiConfig::default())
    }

    /// Create initial game state with the given computer settings
    pub fn with_ai(ai: AiConfig) -> Self {
        GameState {
            board: Board::new(),
            side_to_move: Side::First,
            history: MoveLog::new(),
            status: GameStatus::InProgress,
            ai,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Cell {
        self.board.get(row, col)
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn history(&self) -> &MoveLog {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn is_ai_enabled(&self) -> bool {
        self.ai.enabled
    }

    pub fn ai_side(&self) -> Side {
        self.ai.side
    }

    /// True when the game is live and the computer is the side to move.
    pub fn is_ai_turn(&self) -> bool {
        self.ai.enabled && !self.is_terminal() && self.side_to_move == self.ai.side
    }

    pub fn set_ai_enabled(&mut self, enabled: bool) {
        if self.ai.enabled != enabled {
            info!(enabled, "computer opponent toggled");
        }
        self.ai.enabled = enabled;
    }

    pub fn set_ai_side(&mut self, side: Side) {
        if self.ai.side != side {
            info!(%side, "computer side changed");
        }
        self.ai.side = side;
    }

    pub fn switch_ai_side(&mut self) {
        self.set_ai_side(self.ai.side.other());
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns().collect()
    }

    /// Drop the side-to-move's disc into `col`.
    pub fn apply_move(&mut self, col: usize) -> Result<MoveOutcome, EngineError> {
        if self.is_terminal() {
            return Err(EngineError::GameOver);
        }
        if col >= COLS {
            return Err(EngineError::InvalidColumn { col });
        }

        let side = self.side_to_move;
        let row = self.board.landing_row(col)?;
        self.board.place(row, col, side);
        self.history.record(Move { row, col, side });

        self.status = evaluate(&self.board, row, col, side);
        if !self.status.is_terminal() {
            self.side_to_move = side.other();
        }

        debug!(row, col, %side, moves = self.history.len(), "move applied");
        match self.status {
            GameStatus::Won(winner) => info!(%winner, moves = self.history.len(), "game won"),
            GameStatus::Drawn => info!("game drawn"),
            GameStatus::InProgress => {}
        }

        Ok(MoveOutcome {
            row,
            col,
            side,
            status: self.status,
            side_to_move: self.side_to_move,
        })
    }

    /// Take back the last move. Against the computer, a reply the computer
    /// already made is taken back too, so the human is to move again.
    ///
    /// Allowed after the game has ended; the status returns to in progress.
    pub fn undo(&mut self) -> Result<UndoOutcome, EngineError> {
        let first = self.undo_one().ok_or(EngineError::NothingToUndo)?;
        let mut reverted = vec![first];

        if self.ai.enabled && self.side_to_move == self.ai.side {
            if let Some(second) = self.undo_one() {
                reverted.push(second);
            }
        }

        debug!(
            reverted = reverted.len(),
            side_to_move = %self.side_to_move,
            "undo"
        );

        Ok(UndoOutcome {
            reverted,
            status: self.status,
            side_to_move: self.side_to_move,
        })
    }

    /// Pop one move and restore the board, turn, and status from before it.
    fn undo_one(&mut self) -> Option<Move> {
        let mv = self.history.undo_one()?;
        self.board.clear(mv.row, mv.col);
        self.side_to_move = mv.side;
        self.status = GameStatus::InProgress;
        Some(mv)
    }

    /// Start a new game. Computer settings carry over.
    pub fn reset(&mut self) -> &GameState {
        debug!("game reset");
        *self = Self::with_ai(self.ai);
        self
    }

    /// The heuristic's column for the side to move.
    pub fn choose_column(&self) -> Result<usize, EngineError> {
        self.choose_column_for(self.side_to_move)
    }

    /// The heuristic's column for `side` on the current board.
    pub fn choose_column_for(&self, side: Side) -> Result<usize, EngineError> {
        heuristic::choose_column(&self.board, side)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

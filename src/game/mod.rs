//! Core Connect Four game logic: board representation, sides, win/draw
//! detection, the move log, and the mutable game state that drives them.

mod board;
pub mod detector;
mod history;
mod side;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use detector::{evaluate, GameStatus, WIN_LENGTH};
pub use history::{Move, MoveLog};
pub use side::Side;
pub use state::{AiConfig, GameState, MoveOutcome, UndoOutcome};

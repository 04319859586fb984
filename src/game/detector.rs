use super::{Board, Cell, Side, COLS, ROWS};

/// Discs in a line needed to win.
pub const WIN_LENGTH: usize = 4;

/// Horizontal, vertical, and the two diagonals. Each axis is walked in both
/// directions from the placed cell.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won(Side),
    Drawn,
}

impl GameStatus {
    /// Check if game is over
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::Won(side) => Some(side),
            _ => None,
        }
    }
}

/// Classify the board after `last_side` dropped a disc at (`last_row`, `last_col`).
///
/// Only lines through the newest disc are checked: any earlier four-in-a-row
/// would already have ended the game.
pub fn evaluate(board: &Board, last_row: usize, last_col: usize, last_side: Side) -> GameStatus {
    if completes_line(board, last_row, last_col, last_side) {
        GameStatus::Won(last_side)
    } else if board.is_full() {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// Whether a `side` disc at (`row`, `col`) sits on a line of at least
/// [`WIN_LENGTH`] discs of that side.
pub fn completes_line(board: &Board, row: usize, col: usize, side: Side) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        1 + run_length(board, row, col, dr, dc, side) + run_length(board, row, col, -dr, -dc, side)
            >= WIN_LENGTH
    })
}

/// Count consecutive `side` discs starting one step away from (`row`, `col`).
fn run_length(board: &Board, row: usize, col: usize, dr: isize, dc: isize, side: Side) -> usize {
    let mut count = 0;
    let mut r = row as isize + dr;
    let mut c = col as isize + dc;
    while (0..ROWS as isize).contains(&r)
        && (0..COLS as isize).contains(&c)
        && board.get(r as usize, c as usize) == Cell::Occupied(side)
    {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Column order that fills all 42 cells, alternating sides from `First`,
/// without ever lining up four.
#[cfg(test)]
pub(crate) const DRAWN_FILL: [usize; 42] = [
    3, 3, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2, 6, 4, 4, 4, 4, 4, 4, 1, 1, 1, 1, 1, 1, 5, 5, 5, 5, 5, 5,
    0, 0, 0, 0, 0, 0, 6, 6, 6, 6, 6,
];

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn place_all(board: &mut Board, cells: &[(usize, usize)], side: Side) {
        for &(row, col) in cells {
            board.place(row, col, side);
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 0), (5, 1), (5, 2), (5, 3)], Side::First);
        assert_eq!(evaluate(&board, 5, 3, Side::First), GameStatus::Won(Side::First));
        // Any disc of the line reports the win
        assert_eq!(evaluate(&board, 5, 1, Side::First), GameStatus::Won(Side::First));
    }

    #[test]
    fn test_gap_is_not_a_win() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 0), (5, 1), (5, 3), (5, 4)], Side::First);
        assert_eq!(evaluate(&board, 5, 4, Side::First), GameStatus::InProgress);

        // Opponent disc in the gap
        board.place(5, 2, Side::Second);
        assert_eq!(evaluate(&board, 5, 4, Side::First), GameStatus::InProgress);
        assert_eq!(evaluate(&board, 5, 2, Side::Second), GameStatus::InProgress);
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Side::Second).unwrap();
        }
        assert_eq!(evaluate(&board, 2, 3, Side::Second), GameStatus::Won(Side::Second));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(6, Side::First).unwrap();
        }
        assert_eq!(evaluate(&board, 3, 6, Side::First), GameStatus::InProgress);
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Side::First).unwrap();

        board.drop_piece(1, Side::Second).unwrap();
        board.drop_piece(1, Side::First).unwrap();

        board.drop_piece(2, Side::Second).unwrap();
        board.drop_piece(2, Side::Second).unwrap();
        board.drop_piece(2, Side::First).unwrap();

        board.drop_piece(3, Side::Second).unwrap();
        board.drop_piece(3, Side::Second).unwrap();
        board.drop_piece(3, Side::Second).unwrap();
        let row = board.drop_piece(3, Side::First).unwrap();

        assert_eq!(evaluate(&board, row, 3, Side::First), GameStatus::Won(Side::First));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::new();
        // Create diagonal \ pattern
        board.drop_piece(6, Side::First).unwrap();

        board.drop_piece(5, Side::Second).unwrap();
        board.drop_piece(5, Side::First).unwrap();

        board.drop_piece(4, Side::Second).unwrap();
        board.drop_piece(4, Side::Second).unwrap();
        board.drop_piece(4, Side::First).unwrap();

        board.drop_piece(3, Side::Second).unwrap();
        board.drop_piece(3, Side::Second).unwrap();
        board.drop_piece(3, Side::Second).unwrap();
        let row = board.drop_piece(3, Side::First).unwrap();

        assert_eq!(evaluate(&board, row, 3, Side::First), GameStatus::Won(Side::First));
    }

    #[test]
    fn test_win_in_middle_of_line() {
        let mut board = Board::new();
        // Filling the gap of X X _ X completes the line
        place_all(&mut board, &[(5, 2), (5, 3), (5, 5)], Side::Second);
        board.place(5, 4, Side::Second);
        assert_eq!(evaluate(&board, 5, 4, Side::Second), GameStatus::Won(Side::Second));
    }

    #[test]
    fn test_counting_stops_at_edges() {
        let mut board = Board::new();
        place_all(&mut board, &[(5, 4), (5, 5), (5, 6)], Side::First);
        assert_eq!(evaluate(&board, 5, 6, Side::First), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let mut board = Board::new();
        let mut side = Side::First;
        let mut last = (0, 0);
        for (i, &col) in DRAWN_FILL.iter().enumerate() {
            let row = board.drop_piece(col, side).unwrap();
            last = (row, col);
            if i + 1 < DRAWN_FILL.len() {
                assert_eq!(evaluate(&board, row, col, side), GameStatus::InProgress);
            }
            side = side.other();
        }
        assert!(board.is_full());
        assert_eq!(evaluate(&board, last.0, last.1, side.other()), GameStatus::Drawn);
    }

    #[test]
    fn test_evaluate_is_mirror_invariant() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let mut board = Board::new();
            let mut side = Side::First;
            loop {
                let legal: Vec<usize> = board.legal_columns().collect();
                if legal.is_empty() {
                    break;
                }
                let col = legal[rng.random_range(0..legal.len())];
                let row = board.drop_piece(col, side).unwrap();

                let status = evaluate(&board, row, col, side);
                let mirrored = evaluate(&board.mirrored(), row, COLS - 1 - col, side);
                assert_eq!(status, mirrored);

                if status.is_terminal() {
                    break;
                }
                side = side.other();
            }
        }
    }

    #[test]
    fn test_status_helpers() {
        assert!(!GameStatus::default().is_terminal());
        assert!(GameStatus::Drawn.is_terminal());
        assert_eq!(GameStatus::Won(Side::Second).winner(), Some(Side::Second));
        assert_eq!(GameStatus::Drawn.winner(), None);
    }
}

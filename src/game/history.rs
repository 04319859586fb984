use super::Side;

/// A disc written to the board: the exact cell and who wrote it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub side: Side,
}

/// Applied moves in order; the back of the log is the next move undone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog { moves: Vec::new() }
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Pop the most recent move
    pub fn undo_one(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn last(&self) -> Option<&Move> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were applied
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Move> + '_ {
        self.moves.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize, side: Side) -> Move {
        Move { row, col, side }
    }

    #[test]
    fn test_undo_is_last_in_first_out() {
        let mut log = MoveLog::new();
        log.record(mv(5, 3, Side::First));
        log.record(mv(4, 3, Side::Second));
        log.record(mv(5, 0, Side::First));

        assert_eq!(log.len(), 3);
        assert_eq!(log.undo_one(), Some(mv(5, 0, Side::First)));
        assert_eq!(log.undo_one(), Some(mv(4, 3, Side::Second)));
        assert_eq!(log.last(), Some(&mv(5, 3, Side::First)));
        assert_eq!(log.undo_one(), Some(mv(5, 3, Side::First)));
        assert!(log.is_empty());
    }

    #[test]
    fn test_undo_on_empty_log() {
        let mut log = MoveLog::default();
        assert_eq!(log.undo_one(), None);
        assert_eq!(log.last(), None);
    }

    #[test]
    fn test_iter_keeps_application_order() {
        let mut log = MoveLog::new();
        log.record(mv(5, 1, Side::First));
        log.record(mv(5, 2, Side::Second));
        let cols: Vec<usize> = log.iter().map(|m| m.col).collect();
        assert_eq!(cols, vec![1, 2]);
    }
}

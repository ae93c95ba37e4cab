use super::types::{Board, Mark};

// Enumeration order is fixed: rows top to bottom, then columns left to
// right, then the two diagonals. The first matching triple wins.
const WIN_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

pub fn check_win(board: &Board) -> Option<Mark> {
    for [(r0, c0), (r1, c1), (r2, c2)] in WIN_LINES {
        let mark = board[r0][c0];
        if mark != Mark::Empty && board[r1][c1] == mark && board[r2][c2] == mark {
            return Some(mark);
        }
    }
    None
}

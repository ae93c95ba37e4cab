use super::stats::GameStatistics;
use super::types::{BOARD_SIZE, Board, GameStatus, Mark};
use super::win_detector::check_win;

const STARTING_MARK: Mark = Mark::X;

#[derive(Debug)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    stats: GameStatistics,
}

impl TicTacToeGameState {
    pub fn new(stats: GameStatistics) -> Self {
        Self {
            board: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_mark: STARTING_MARK,
            stats,
        }
    }

    #[cfg(test)]
    pub fn from_board(board: Board, current_mark: Mark) -> Self {
        Self {
            board,
            current_mark,
            stats: GameStatistics::new(),
        }
    }

    pub fn place_mark(&mut self, row: usize, col: usize) -> bool {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return false;
        }
        if self.evaluate_outcome() != GameStatus::InProgress {
            return false;
        }
        if self.board[row][col] != Mark::Empty {
            return false;
        }

        self.board[row][col] = self.current_mark;
        self.switch_turn();
        true
    }

    pub fn evaluate_outcome(&self) -> GameStatus {
        if let Some(mark) = check_win(&self.board) {
            return GameStatus::Won(mark);
        }

        if self.is_board_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    // Caller contract: invoked once per finished game. A second call for the
    // same game counts it again.
    pub fn finalize_game(&mut self) {
        let outcome = self.evaluate_outcome();
        self.stats.record(outcome);
    }

    pub fn reset_board(&mut self) {
        self.board = [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE];
        self.current_mark = STARTING_MARK;
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn is_board_full(&self) -> bool {
        self.board
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn stats(&self) -> &GameStatistics {
        &self.stats
    }
}

mod game_state;
mod stats;
mod types;
mod win_detector;

pub use game_state::TicTacToeGameState;
pub use stats::GameStatistics;
pub use types::{BOARD_SIZE, Board, GameStatus, Mark};
pub use win_detector::check_win;

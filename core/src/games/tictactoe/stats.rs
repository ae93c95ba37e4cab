use super::types::{GameStatus, Mark};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameStatistics {
    pub total_games: u32,
    pub x_wins: u32,
    pub o_wins: u32,
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: GameStatus) {
        match outcome {
            GameStatus::Won(mark) => {
                self.total_games += 1;
                match mark {
                    Mark::X => self.x_wins += 1,
                    Mark::O => self.o_wins += 1,
                    Mark::Empty => unreachable!(),
                }
            }
            GameStatus::Draw => {
                self.total_games += 1;
            }
            GameStatus::InProgress => {}
        }
    }
}

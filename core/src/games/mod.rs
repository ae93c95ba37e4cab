pub mod crossword;
pub mod tictactoe;

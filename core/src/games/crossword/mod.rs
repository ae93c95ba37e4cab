mod grid;
mod settings;
mod types;
mod validate;

pub use grid::CrosswordGrid;
pub use settings::{CrosswordSettings, load_crossword_settings};
pub use types::{CrosswordCell, CrosswordItem};

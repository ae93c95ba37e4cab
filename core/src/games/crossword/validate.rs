use super::grid::CrosswordGrid;

impl CrosswordGrid {
    // Pass/fail only: every cell must hold the matching answer character.
    pub fn check_answers(&self) -> bool {
        for (row, item) in self.items().iter().enumerate() {
            for (col, expected) in item.answer.chars().enumerate() {
                let input = match self.get(row, col).and_then(|cell| cell.input) {
                    Some(input) => input,
                    None => return false,
                };
                if !chars_match(input, expected) {
                    return false;
                }
            }
        }
        true
    }
}

// Case fold via Unicode uppercase on both sides; no other normalization.
fn chars_match(input: char, expected: char) -> bool {
    input.to_uppercase().eq(expected.to_uppercase())
}

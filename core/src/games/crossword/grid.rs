use super::types::{CrosswordCell, CrosswordItem};

#[derive(Clone, Debug)]
pub struct CrosswordGrid {
    items: Vec<CrosswordItem>,
    cells: Vec<Vec<CrosswordCell>>,
}

impl CrosswordGrid {
    pub fn new(items: Vec<CrosswordItem>) -> Self {
        let mut grid = Self {
            items,
            cells: Vec::new(),
        };
        grid.rebuild();
        grid
    }

    // Rebuilds every row from the answer list, dropping all player input.
    pub fn rebuild(&mut self) {
        let mut cells = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let mut row = vec![CrosswordCell::default(); item.answer.chars().count()];
            if let Some(first) = row.first_mut() {
                first.clue_number = Some(index + 1);
            }
            cells.push(row);
        }
        self.cells = cells;
    }

    // Keeps only the first character of the input; an empty input clears
    // the cell.
    pub fn set_cell_input(&mut self, row: usize, col: usize, input: &str) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            cell.input = input.chars().next();
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&CrosswordCell> {
        self.cells.get(row).and_then(|cells| cells.get(col))
    }

    pub fn row_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[Vec<CrosswordCell>] {
        &self.cells
    }

    pub fn items(&self) -> &[CrosswordItem] {
        &self.items
    }
}

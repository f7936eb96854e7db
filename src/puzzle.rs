// vim: set ai et ts=4 sw=4 sts=4:
use std::rc::{Rc};
use std::cell::{Ref, RefCell};

use super::grid::{Grid, Field, Error};
use super::group::Group;

/// Lifecycle contract for a concrete puzzle kind.
///
/// `load_data` parses a textual description, runs every structural check its
/// format requires, and must finish by calling `init_data` exactly once.
/// `init_data` is the fixed two-step sequence and is not meant to be
/// overridden; `set_fields` and `set_groups` are the per-puzzle extension
/// points it drives.
pub trait Puzzle {
    fn load_data(&mut self, data: &str) -> Result<(), Error>;
    fn set_fields(&mut self) -> Result<(), Error>;
    fn set_groups(&mut self) -> Result<(), Error>;

    fn init_data(&mut self) -> Result<(), Error> {
        self.set_fields()?;
        self.set_groups()?;
        Ok(())
    }
}

// -------------------------------------------------------------

#[derive(Debug)]
pub struct RectanglePuzzle<V> {
    pub width:        usize,
    pub height:       usize,
    pub grid:         Rc<RefCell<Grid<V>>>,
    pub solution:     Option<Rc<RefCell<Grid<V>>>>, // parallel grid of expected final values
    pub groups:       Vec<Group<V>>,
    pub row_values:   Vec<Vec<V>>,  // the as-loaded raw grid, one list per row
    pub row_clues:    Vec<u32>,     // west-side clue per row
    pub col_clues:    Vec<u32>,     // north-side clue per column
    pub row_solution: Vec<Vec<V>>,
}

impl<V: Copy> RectanglePuzzle<V> {
    pub fn new() -> RectanglePuzzle<V> {
        RectanglePuzzle {
            width:        0,
            height:       0,
            grid:         Rc::new(RefCell::new(Grid::empty())),
            solution:     None,
            groups:       Vec::<Group<V>>::new(),
            row_values:   Vec::new(),
            row_clues:    Vec::new(),
            col_clues:    Vec::new(),
            row_solution: Vec::new(),
        }
    }

    pub fn populate_fields(&mut self) {
        // materializes the arena from the raw rows; neighbor wiring happens
        // inside Grid::from_rows
        self.grid = Rc::new(RefCell::new(Grid::from_rows(&self.row_values)));
        if !self.row_solution.is_empty() {
            self.solution = Some(Rc::new(RefCell::new(Grid::from_rows(&self.row_solution))));
        }
    }

    pub fn field_count(&self) -> usize {
        self.grid.borrow().len()
    }
    pub fn get_field(&self, i_row: usize, i_col: usize) -> Result<Ref<Field<V>>, Error> {
        let grid = self.grid.borrow();
        let index = grid.field_index(i_row, i_col)?;
        Ok(Ref::map(grid, |g| &g.fields[index]))
    }
    pub fn add_group(&mut self, group: Group<V>) {
        self.groups.push(group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::IndexError;

    fn sample() -> RectanglePuzzle<char> {
        let mut puzzle = RectanglePuzzle::<char>::new();
        puzzle.width = 2;
        puzzle.height = 2;
        puzzle.row_values = vec![vec!['a', 'b'],
                                 vec!['c', 'd']];
        puzzle.populate_fields();
        puzzle
    }

    #[test]
    fn starts_out_empty() {
        let puzzle = RectanglePuzzle::<char>::new();
        assert_eq!(puzzle.field_count(), 0);
        assert!(puzzle.groups.is_empty());
        assert!(puzzle.solution.is_none());
    }

    #[test]
    fn get_field_maps_row_major() {
        let puzzle = sample();
        assert_eq!(puzzle.field_count(), 4);
        assert_eq!(puzzle.get_field(0, 0).unwrap().get_value(), 'a');
        assert_eq!(puzzle.get_field(1, 0).unwrap().get_value(), 'c');
        assert_eq!(puzzle.get_field(1, 1).unwrap().get_value(), 'd');
        for y in 0..2 {
            for x in 0..2 {
                let field = puzzle.get_field(y, x).unwrap();
                assert_eq!((field.get_row(), field.get_col()), (y, x));
            }
        }
    }

    #[test]
    fn get_field_rejects_out_of_range() {
        let puzzle = sample();
        assert_eq!(puzzle.get_field(0, 2).err(),
                   Some(Error::Index(IndexError::Col(2))));
        assert_eq!(puzzle.get_field(2, 0).err(),
                   Some(Error::Index(IndexError::Row(2))));
    }

    #[test]
    fn solution_grid_is_only_built_when_solutions_were_loaded() {
        let mut puzzle = sample();
        assert!(puzzle.solution.is_none());

        puzzle.row_solution = vec![vec!['w', 'x'],
                                   vec!['y', 'z']];
        puzzle.populate_fields();
        let solution = puzzle.solution.as_ref().unwrap().borrow();
        assert_eq!(solution.len(), 4);
        assert_eq!(solution.get_field(1, 0).unwrap().get_value(), 'y');
    }
}

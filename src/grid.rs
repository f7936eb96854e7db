// vim: set ai et ts=4 sts=4:
use std::fmt;
use std::rc::{Rc};
use std::cell::{RefCell};
use super::util::Compass;

pub trait HasGridLocation {
    fn get_row(&self) -> usize;
    fn get_col(&self) -> usize;
    fn fmt_location(&self) -> String {
        format!("(col={:-2}, row={:-2})", self.get_col(), self.get_row())
    }
}

// ------------------------------------------------

#[derive(PartialEq, Debug)]
pub enum FormatError {
    Row(String),                   // row line doesn't split into the required tokens
    RowLength(String, usize),
    SolutionLength(String, usize),
    RowCount(usize, usize),
    ClueCount(usize, usize),
    PartialSolution(usize, usize), // some rows carry a solution token, others don't
}
impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            FormatError::Row(row) =>
                format!("row \"{}\" is not valid", row),
            FormatError::RowLength(row, expected) =>
                format!("length of row \"{}\" is not {}", row, expected),
            FormatError::SolutionLength(solution, expected) =>
                format!("length of row solution \"{}\" is not {}", solution, expected),
            FormatError::RowCount(found, expected) =>
                format!("number of value rows {} is not {}", found, expected),
            FormatError::ClueCount(found, expected) =>
                format!("number of row clues {} is not {}", found, expected),
            FormatError::PartialSolution(found, expected) =>
                format!("only {} of {} rows carry a solution", found, expected),
        })
    }
}

#[derive(PartialEq, Debug)]
pub enum ValueError {
    Symbol(char), // character outside the puzzle's symbol alphabet
}
impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            ValueError::Symbol(value) =>
                format!("value \"{}\" is not valid", value),
        })
    }
}

#[derive(PartialEq, Debug)]
pub enum IndexError {
    Clue(String), // clue token that doesn't parse as an integer
    Row(usize),
    Col(usize),
}
impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            IndexError::Clue(token) =>
                format!("index value \"{}\" is not valid", token),
            IndexError::Row(index) =>
                format!("row index \"{}\" out of range", index),
            IndexError::Col(index) =>
                format!("col index \"{}\" out of range", index),
        })
    }
}

#[derive(PartialEq, Debug)]
pub enum Error {
    Format(FormatError),
    Value(ValueError),
    Index(IndexError),
    Logic(String),
}
impl From<FormatError> for Error {
    fn from(other: FormatError) -> Self {
        Error::Format(other)
    }
}
impl From<ValueError> for Error {
    fn from(other: ValueError) -> Self {
        Error::Value(other)
    }
}
impl From<IndexError> for Error {
    fn from(other: IndexError) -> Self {
        Error::Index(other)
    }
}
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Error::Format(x) => x.to_string(),
            Error::Value(x)  => x.to_string(),
            Error::Index(x)  => x.to_string(),
            Error::Logic(s)  => s.to_string(),
        })
    }
}

// ------------------------------------------------

#[derive(Debug, Clone)]
pub struct Field<V> {
    row: usize,
    col: usize,
    value: V,
    neighbors: [Option<usize>; 8], // arena indices, one slot per Compass direction
}
impl<V: Copy> Field<V> {
    pub fn new(x: usize, y: usize, value: V) -> Field<V> {
        Field {
            row: y,
            col: x,
            value: value,
            neighbors: [None; 8],
        }
    }

    pub fn get_row(&self) -> usize { self.row }
    pub fn get_col(&self) -> usize { self.col }
    pub fn get_value(&self) -> V { self.value }

    pub fn set_value(&mut self, new_value: V) {
        // no validation at this layer; the loader owns the symbol alphabet
        self.value = new_value;
    }

    pub fn get_neighbor(&self, direction: Compass) -> Option<usize> {
        self.neighbors[direction as usize]
    }
    pub fn set_neighbor(&mut self, direction: Compass, index: usize) {
        self.neighbors[direction as usize] = Some(index);
    }
}
impl<V: fmt::Display + Copy> fmt::Display for Field<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
impl<V: Copy> HasGridLocation for Field<V> {
    fn get_row(&self) -> usize { self.row }
    fn get_col(&self) -> usize { self.col }
}

// ------------------------------------------------

#[derive(Clone)]
pub struct Grid<V> {
    width: usize,
    height: usize,
    pub fields: Vec<Field<V>>, // flat, row-major; a field's identity is its index in here
}
impl<V: Copy> Grid<V> {
    pub fn empty() -> Grid<V> {
        Grid {
            width: 0,
            height: 0,
            fields: Vec::new(),
        }
    }
    pub fn from_rows(rows: &Vec<Vec<V>>) -> Grid<V> {
        let height = rows.len();
        let width = match rows.first() {
            Some(row) => row.len(),
            None      => 0,
        };
        let mut fields = Vec::<Field<V>>::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &value) in row.iter().enumerate() {
                fields.push(Field::new(x, y, value));
            }
        }
        let mut grid = Grid {
            width: width,
            height: height,
            fields: fields,
        };
        grid.wire_neighbors();
        grid
    }

    pub fn width(&self) -> usize { self.width }
    pub fn height(&self) -> usize { self.height }
    pub fn len(&self) -> usize { self.fields.len() }

    pub fn field_index(&self, i_row: usize, i_col: usize) -> Result<usize, IndexError> {
        // a too-large row overflows the flat index, but a too-large col wraps
        // into the next row without doing so; both checks are needed
        if i_row * self.width + i_col >= self.fields.len() {
            return Err(IndexError::Row(i_row));
        }
        if i_col >= self.width {
            return Err(IndexError::Col(i_col));
        }
        Ok(i_row * self.width + i_col)
    }
    pub fn get_field(&self, i_row: usize, i_col: usize) -> Result<&Field<V>, IndexError> {
        let index = self.field_index(i_row, i_col)?;
        Ok(&self.fields[index])
    }
    pub fn get_field_mut(&mut self, i_row: usize, i_col: usize) -> Result<&mut Field<V>, IndexError> {
        let index = self.field_index(i_row, i_col)?;
        Ok(&mut self.fields[index])
    }

    pub fn wire_neighbors(&mut self) {
        // single pass; every link is set from the side being visited, so the
        // symmetry A.E == B <=> B.W == A holds by construction
        for y in 0..self.height {
            for x in 0..self.width {
                let index = y * self.width + x;
                for &direction in Compass::ALL.iter() {
                    let (dy, dx) = direction.delta();
                    let ny = y as i32 + dy;
                    let nx = x as i32 + dx;
                    if ny < 0 || ny >= self.height as i32 { continue; }
                    if nx < 0 || nx >= self.width as i32 { continue; }
                    self.fields[index].set_neighbor(direction, (ny as usize) * self.width + (nx as usize));
                }
            }
        }
    }
    pub fn get_neighbor(&self, index: usize, direction: Compass) -> Option<&Field<V>> {
        self.fields[index].get_neighbor(direction).map(|i| &self.fields[i])
    }
}

impl<V> fmt::Debug for Grid<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grid(w={}, h={})", self.width, self.height)
    }
}

// ------------------------------------------------

pub trait CloneGridAware<V> {
    // clones a struct that carries an Rc<RefCell<Grid<V>>>
    fn clone_with_grid(&self, grid: &Rc<RefCell<Grid<V>>>) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid3x4() -> Grid<i32> {
        Grid::from_rows(&vec![
            vec![0, 1, 2, 3],
            vec![4, 5, 6, 7],
            vec![8, 9, 10, 11],
        ])
    }

    #[test]
    fn flat_index_is_row_major() {
        let grid = grid3x4();
        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.len(), 12);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(grid.field_index(y, x).unwrap(), y * 4 + x);
                assert_eq!(grid.get_field(y, x).unwrap().get_value(), (y * 4 + x) as i32);
                assert_eq!(grid.get_field(y, x).unwrap().get_row(), y);
                assert_eq!(grid.get_field(y, x).unwrap().get_col(), x);
            }
        }
    }

    #[test]
    fn out_of_range_lookups_are_rejected() {
        let grid = grid3x4();
        assert_eq!(grid.field_index(0, 4).unwrap_err(), IndexError::Col(4));
        assert_eq!(grid.field_index(3, 0).unwrap_err(), IndexError::Row(3));
        // the flat bound trips before the col bound here
        assert_eq!(grid.field_index(2, 4).unwrap_err(), IndexError::Row(2));
    }

    #[test]
    fn neighbor_wiring_is_symmetric() {
        let grid = grid3x4();
        for (i, field) in grid.fields.iter().enumerate() {
            for &direction in Compass::ALL.iter() {
                if let Some(j) = field.get_neighbor(direction) {
                    assert_eq!(grid.fields[j].get_neighbor(direction.opposite()), Some(i));
                }
            }
        }
    }

    #[test]
    fn corners_and_edges_have_no_outside_neighbors() {
        let grid = grid3x4();
        let count = |i: usize| Compass::ALL.iter()
                                           .filter(|&&d| grid.fields[i].get_neighbor(d).is_some())
                                           .count();
        assert_eq!(count(0), 3);  // top left corner
        assert_eq!(count(3), 3);  // top right corner
        assert_eq!(count(8), 3);  // bottom left corner
        assert_eq!(count(11), 3); // bottom right corner
        assert_eq!(count(1), 5);  // top edge
        assert_eq!(count(5), 8);  // interior
    }

    #[test]
    fn neighbor_links_point_at_the_adjacent_field() {
        let grid = grid3x4();
        assert_eq!(grid.get_neighbor(5, Compass::North).map(|f| f.get_value()), Some(1));
        assert_eq!(grid.get_neighbor(5, Compass::SouthEast).map(|f| f.get_value()), Some(10));
        assert_eq!(grid.get_neighbor(0, Compass::NorthWest).map(|f| f.get_value()), None);
        assert_eq!(grid.get_neighbor(11, Compass::East).map(|f| f.get_value()), None);
    }

    #[test]
    fn error_messages_name_the_offending_value() {
        assert_eq!(IndexError::Clue(String::from("a")).to_string(),
                   "index value \"a\" is not valid");
        assert_eq!(ValueError::Symbol('q').to_string(),
                   "value \"q\" is not valid");
        assert_eq!(FormatError::RowLength(String::from("..x"), 10).to_string(),
                   "length of row \"..x\" is not 10");
        assert_eq!(Error::from(IndexError::Row(7)).to_string(),
                   "row index \"7\" out of range");
    }
}

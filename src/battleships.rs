// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::convert::TryFrom;
use std::rc::{Rc};
use log::{debug, trace};

use super::util::{ralign, Direction::*};
use super::grid::{Error, FormatError, ValueError, IndexError};
use super::group::{Group, Restriction};
use super::puzzle::{Puzzle, RectanglePuzzle};

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Cell {
    Empty,
    Hit,
    NoHit,
}
impl TryFrom<char> for Cell {
    type Error = ValueError;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            '.' => Ok(Cell::Empty),
            'x' => Ok(Cell::Hit),
            '-' => Ok(Cell::NoHit),
            _   => Err(ValueError::Symbol(value)),
        }
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match *self {
            Cell::Empty => '.',
            Cell::Hit   => 'x',
            Cell::NoHit => '-',
        })
    }
}

// ------------------------------------------------

/// A Battleships grid: square, with a hit-count clue on the west side of
/// every row and the north side of every column.
///
/// The textual layout is a header line of single-digit column clues (its
/// length fixes both dimensions), followed by one line per row holding the
/// row clue, the row's values, and optionally the row's solution:
///
/// ```text
///   1133102414
/// 3 ..x.....x.    --x----xx-
/// 1 ..........    --x-------
/// ...
/// ```
#[derive(Debug)]
pub struct Battleships {
    pub rect: RectanglePuzzle<Cell>,
    loaded: bool,
}

impl Battleships {
    pub fn new() -> Battleships {
        Battleships {
            rect:   RectanglePuzzle::new(),
            loaded: false,
        }
    }
    pub fn from_data(data: &str) -> Result<Battleships, Error> {
        let mut puzzle = Battleships::new();
        puzzle.load_data(data)?;
        Ok(puzzle)
    }

    pub fn width(&self) -> usize { self.rect.width }
    pub fn height(&self) -> usize { self.rect.height }

    pub fn is_solved(&self) -> bool {
        self.rect.groups.iter().all(|g| g.is_satisfied())
    }

    fn parse_index(token: &str) -> Result<u32, IndexError> {
        match token.parse::<u32>() {
            Ok(value) => Ok(value),
            Err(_)    => Err(IndexError::Clue(String::from(token))),
        }
    }
    fn parse_values(token: &str) -> Result<Vec<Cell>, ValueError> {
        token.chars()
             .map(Cell::try_from)
             .collect()
    }

    fn hit_count(values: &[Cell]) -> usize {
        values.iter().filter(|&&v| v == Cell::Hit).count()
    }
    fn exact_hit_count(clue: u32) -> Restriction<Cell> {
        // clue is captured by value: every group keeps its own target
        Restriction::new(&format!("exactly {} hits", clue), move |values: &[Cell]| {
            Self::hit_count(values) == clue as usize
        })
    }
}

impl Puzzle for Battleships {
    fn load_data(&mut self, data: &str) -> Result<(), Error> {
        // one-shot: a second load on the same instance is refused outright
        if self.loaded {
            return Err(Error::Logic(String::from("puzzle data was already loaded")));
        }

        let data = data.trim_matches('\n');
        let mut solutions = Vec::<Option<Vec<Cell>>>::new();
        for (i_row, row) in data.split('\n').enumerate() {
            let row = row.trim();
            if i_row == 0 {
                // header: one digit per column; its length fixes both dimensions
                self.rect.col_clues = row.chars()
                                         .map(|c| Self::parse_index(&c.to_string()))
                                         .collect::<Result<Vec<_>, _>>()?;
                self.rect.width = self.rect.col_clues.len();
                self.rect.height = self.rect.col_clues.len();
                debug!("header: width={}, height={}", self.rect.width, self.rect.height);
            } else {
                let row_split = row.split_whitespace().collect::<Vec<_>>();
                if row_split.len() < 2 {
                    return Err(Error::from(FormatError::Row(String::from(row))));
                }
                let row_index = Self::parse_index(row_split[0])?;
                let row_data = row_split[1];
                let row_solution = match row_split.len() > 2 {
                    true  => Some(row_split[2]),
                    false => None,
                };

                self.rect.row_clues.push(row_index);
                if row_data.chars().count() != self.rect.width {
                    return Err(Error::from(FormatError::RowLength(String::from(row_data),
                                                                  self.rect.width)));
                }
                self.rect.row_values.push(Self::parse_values(row_data)?);

                match row_solution {
                    Some(token) => {
                        if token.chars().count() != self.rect.width {
                            return Err(Error::from(FormatError::SolutionLength(String::from(token),
                                                                               self.rect.width)));
                        }
                        solutions.push(Some(Self::parse_values(token)?));
                    }
                    None => solutions.push(None),
                }
                trace!("row {}: clue={}, solution={}",
                       i_row - 1, row_index, row_split.len() > 2);
            }
        }

        if self.rect.row_values.len() != self.rect.height {
            return Err(Error::from(FormatError::RowCount(self.rect.row_values.len(),
                                                         self.rect.height)));
        }
        if self.rect.row_clues.len() != self.rect.height {
            return Err(Error::from(FormatError::ClueCount(self.rect.row_clues.len(),
                                                          self.rect.height)));
        }
        // solutions are all-or-nothing: a file that covers only some rows is
        // rejected instead of being carried as a partially solved dataset
        let with_solution = solutions.iter().filter(|s| s.is_some()).count();
        if with_solution > 0 && with_solution != solutions.len() {
            return Err(Error::from(FormatError::PartialSolution(with_solution,
                                                                solutions.len())));
        }
        if with_solution > 0 {
            self.rect.row_solution = solutions.into_iter().flatten().collect();
        }

        self.init_data()?;
        self.loaded = true;
        debug!("loaded {}x{} puzzle, {} groups",
               self.rect.width, self.rect.height, self.rect.groups.len());
        Ok(())
    }

    fn set_fields(&mut self) -> Result<(), Error> {
        self.rect.populate_fields();
        Ok(())
    }

    fn set_groups(&mut self) -> Result<(), Error> {
        let grid = Rc::clone(&self.rect.grid);
        for y in 0..self.rect.height {
            let clue = self.rect.row_clues[y];
            let mut group = Group::line(&grid, Horizontal, y);
            group.add_restriction(Self::exact_hit_count(clue));
            self.rect.add_group(group);
        }
        for x in 0..self.rect.width {
            let clue = self.rect.col_clues[x];
            let mut group = Group::line(&grid, Vertical, x);
            group.add_restriction(Self::exact_hit_count(clue));
            self.rect.add_group(group);
        }
        Ok(())
    }
}

impl fmt::Display for Battleships {
    // re-emits the textual grammar the loader accepts; loading the output
    // again yields the same values and clues
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let clue_width = self.rect.row_clues.iter()
                                            .map(|c| c.to_string().len())
                                            .max()
                                            .unwrap_or(0);
        let header = self.rect.col_clues.iter()
                                        .map(|c| c.to_string())
                                        .collect::<Vec<_>>()
                                        .join("");
        write!(f, "{} {}\n", ralign("", clue_width), header)?;
        for y in 0..self.rect.height {
            let values = self.rect.row_values[y].iter()
                                                .map(|v| v.to_string())
                                                .collect::<Vec<_>>()
                                                .join("");
            write!(f, "{} {}",
                   ralign(&self.rect.row_clues[y].to_string(), clue_width),
                   values)?;
            if y < self.rect.row_solution.len() {
                let solution = self.rect.row_solution[y].iter()
                                                        .map(|v| v.to_string())
                                                        .collect::<Vec<_>>()
                                                        .join("");
                write!(f, "    {}", solution)?;
            }
            write!(f, "\n")?;
        }
        return Ok(());
    }
}

// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::rc::{Rc};
use std::cell::{RefCell};
use ansi_term::{Colour, Style, ANSIString};

use super::util::{Direction, Direction::*};
use super::grid::{Grid, CloneGridAware};

pub struct Restriction<V> {
    name: String,
    test_fn: Rc<dyn Fn(&[V]) -> bool>,
}

impl<V> Restriction<V> {
    pub fn new<F>(name: &str, test_fn: F) -> Restriction<V>
        where F: Fn(&[V]) -> bool + 'static
    {
        Restriction {
            name: String::from(name),
            test_fn: Rc::new(test_fn),
        }
    }
    pub fn get_name(&self) -> &str {
        &self.name
    }
    // must stay side-effect free: a solver calls this on every trial assignment
    pub fn test(&self, values: &[V]) -> bool {
        (self.test_fn)(values)
    }
}
impl<V> Clone for Restriction<V> {
    fn clone(&self) -> Self {
        Restriction {
            name:    self.name.clone(),
            test_fn: Rc::clone(&self.test_fn),
        }
    }
}
impl<V> fmt::Debug for Restriction<V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Restriction({})", self.name)
    }
}

// -------------------------------------------------------------

#[derive(Debug)]
pub struct Group<V> {
    pub name:          String,
    pub field_indices: Vec<usize>, // indices into the shared grid, in presentation order
    pub restrictions:  Vec<Restriction<V>>,
    pub grid:          Rc<RefCell<Grid<V>>>,
}

impl<V: Copy> Group<V> {
    pub fn new(grid: &Rc<RefCell<Grid<V>>>,
               name: &str,
               field_indices: Vec<usize>) -> Group<V>
    {
        Group {
            name:          String::from(name),
            field_indices: field_indices,
            restrictions:  Vec::<Restriction<V>>::new(),
            grid:          Rc::clone(grid),
        }
    }
    pub fn line(grid: &Rc<RefCell<Grid<V>>>,
                direction: Direction,
                line_index: usize) -> Group<V>
    {
        // one full row or column of the grid, walked in line order
        let (width, height) = {
            let g = grid.borrow();
            (g.width(), g.height())
        };
        let (name, field_indices) = match direction {
            Horizontal => (format!("row {}", line_index),
                           (0..width).map(|x| line_index * width + x).collect::<Vec<_>>()),
            Vertical   => (format!("col {}", line_index),
                           (0..height).map(|y| y * width + line_index).collect::<Vec<_>>()),
        };
        Group::new(grid, &name, field_indices)
    }

    pub fn add_restriction(&mut self, restriction: Restriction<V>) {
        self.restrictions.push(restriction);
    }
    pub fn len(&self) -> usize {
        self.field_indices.len()
    }

    pub fn values(&self) -> Vec<V> {
        // live values at call time, never a snapshot from group construction
        let grid = self.grid.borrow();
        self.field_indices.iter()
                          .map(|&i| grid.fields[i].get_value())
                          .collect()
    }
    pub fn is_satisfied(&self) -> bool {
        let values = self.values();
        self.restrictions.iter().all(|r| r.test(&values))
    }

    pub fn to_colored_string(&self) -> ANSIString {
        let style = match self.is_satisfied() {
            true  => Style::new().fg(Colour::Fixed(241)),
            false => Style::default(),
        };
        style.paint(self.name.clone())
    }
}

impl<V: Copy> CloneGridAware<V> for Group<V> {
    fn clone_with_grid(&self, grid: &Rc<RefCell<Grid<V>>>) -> Self {
        Group {
            name:          self.name.clone(),
            field_indices: self.field_indices.clone(),
            restrictions:  self.restrictions.clone(),
            grid:          Rc::clone(grid),
        }
    }
}

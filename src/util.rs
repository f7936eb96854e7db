// vim: set ai et ts=4 sw=4 sts=4:
use std::fmt;
use std::os::unix::io::AsRawFd;
use ansi_term::ANSIString;

pub fn maybe_color(s: &ANSIString, emit_color: bool) -> String {
    match emit_color {
        true  => s.to_string(),
        false => (**s).to_string(), // deref once to get ANSIString, once more to get underlying str
    }
}
pub fn ralign(s: &str, width: usize) -> String {
    if s.len() >= width {
        return String::from(s);
    }
    format!("{}{}", " ".repeat(width-s.len()), s)
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
}
impl fmt::Display for Direction {
    fn fmt(&self,
           f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", match self {
            Direction::Horizontal => "Horizontal",
            Direction::Vertical   => "Vertical",
        })
    }
}

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Compass {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}
impl Compass {
    pub const ALL: [Compass; 8] = [
        Compass::North, Compass::NorthEast, Compass::East, Compass::SouthEast,
        Compass::South, Compass::SouthWest, Compass::West, Compass::NorthWest,
    ];

    // (row, col) offset of the adjacent square in this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Compass::North     => (-1,  0),
            Compass::NorthEast => (-1,  1),
            Compass::East      => ( 0,  1),
            Compass::SouthEast => ( 1,  1),
            Compass::South     => ( 1,  0),
            Compass::SouthWest => ( 1, -1),
            Compass::West      => ( 0, -1),
            Compass::NorthWest => (-1, -1),
        }
    }
    pub fn opposite(self) -> Compass {
        match self {
            Compass::North     => Compass::South,
            Compass::NorthEast => Compass::SouthWest,
            Compass::East      => Compass::West,
            Compass::SouthEast => Compass::NorthWest,
            Compass::South     => Compass::North,
            Compass::SouthWest => Compass::NorthEast,
            Compass::West      => Compass::East,
            Compass::NorthWest => Compass::SouthEast,
        }
    }
}
impl fmt::Display for Compass {
    fn fmt(&self,
           f: &mut fmt::Formatter) -> fmt::Result
    {
        write!(f, "{}", match self {
            Compass::North     => "N",
            Compass::NorthEast => "NE",
            Compass::East      => "E",
            Compass::SouthEast => "SE",
            Compass::South     => "S",
            Compass::SouthWest => "SW",
            Compass::West      => "W",
            Compass::NorthWest => "NW",
        })
    }
}

pub fn is_a_tty<T: AsRawFd>(handle: T) -> bool {
    extern crate libc;
    let fd = handle.as_raw_fd();
    unsafe { libc::isatty(fd) != 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ralign_pads_on_the_left() {
        assert_eq!(ralign("3", 2), " 3");
        assert_eq!(ralign("10", 2), "10");
        assert_eq!(ralign("100", 2), "100");
    }

    #[test]
    fn compass_opposites_cancel_out() {
        for &direction in Compass::ALL.iter() {
            let (dy, dx) = direction.delta();
            let (oy, ox) = direction.opposite().delta();
            assert_eq!((dy + oy, dx + ox), (0, 0));
            assert_eq!(direction.opposite().opposite(), direction);
        }
    }
}

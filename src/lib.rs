// vim: set ai et ts=4 sts=4 sw=4:
pub mod util;
pub mod grid;
pub mod group;
pub mod puzzle;
pub mod battleships;

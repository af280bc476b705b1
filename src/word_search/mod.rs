//! Finance word search.
//!
//! A square letter grid hides a fixed list of terms laid horizontally,
//! vertically or along either downward diagonal. The player drags across a
//! straight run of cells; on release the letters are read forward and backward
//! and checked against the list. Finding every word ends the session with a
//! time-based score.
//!
//! Layout:
//! - [`grid`]: cells, placements and the generator (seedable, never skips a word)
//! - [`selection`]: drag bookkeeping and straight-line validation
//! - [`session`]: found words, one-second clock, final score and callback

pub mod grid;
pub mod selection;
pub mod session;

pub use grid::{Cell, Direction, Grid, Position, Puzzle, WordPlacement, generate};
pub use selection::{Selection, line_direction};
pub use session::{SelectionOutcome, WordSearchSession, time_score};

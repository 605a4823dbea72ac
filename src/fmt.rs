use std::fmt;

use crate::{Board, Square};

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// Renders a board with a path overlaid.
///
/// Path squares show their zero-based move number as a base-36 digit (`+`
/// past 35), every other square shows `.`.
pub struct Trace<'a> {
    pub board: &'a Board,
    pub path: &'a [Square],
}

impl fmt::Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.board.size() {
            for col in 0..self.board.size() {
                let here = Square(row, col);
                match self.path.iter().position(|&sq| sq == here) {
                    Some(i) => char::from_digit(i as u32, 36).unwrap_or('+').fmt(f)?,
                    None => '.'.fmt(f)?,
                }
            }
            "\n".fmt(f)?;
        }
        Ok(())
    }
}

use std::str::FromStr;

use crate::{Error, Square};

impl FromStr for Square {
    type Err = Error;

    /// Parses `"ROW,COL"`, e.g. `"0,0"` or `"3,7"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || Error::BadSquare(s.to_owned());
        let (row, col) = s.split_once(',').ok_or_else(bad)?;
        let row = row.trim().parse::<u8>().map_err(|_| bad())?;
        let col = col.trim().parse::<u8>().map_err(|_| bad())?;
        Ok(Square(row, col))
    }
}

use std::ops::Add;

use crate::{Error, Result};

/// a cell position on the board, `x` is the column and `y` the row.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

#[macro_export]
macro_rules! pos {
    ($x:expr, $y:expr) => {
        Pos { x: $x, y: $y }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.x + rhs.x, self.y + rhs.y)
    }
}

/// parses an `x,y` token into a signed coordinate pair.
pub fn parse_coords(token: &str) -> Result<(i64, i64)> {
    let parts: Vec<_> = token.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [x, y] => match (x.parse(), y.parse()) {
            (Ok(x), Ok(y)) => Ok((x, y)),
            _ => Err(Error::InvalidPosition(token.to_string())),
        },
        _ => Err(Error::InvalidPosition(token.to_string())),
    }
}

#[test]
fn test_parse_coords() {
    assert_eq!(parse_coords("1,2").unwrap(), (1, 2));
    assert_eq!(parse_coords(" 3 , 0 ").unwrap(), (3, 0));
    assert_eq!(parse_coords("-1,4").unwrap(), (-1, 4));
    assert!(matches!(parse_coords("1"), Err(Error::InvalidPosition(_))));
    assert!(matches!(parse_coords("1,2,3"), Err(Error::InvalidPosition(_))));
    assert!(matches!(parse_coords("a,b"), Err(Error::InvalidPosition(_))));
    assert!(matches!(parse_coords("1.5,2"), Err(Error::InvalidPosition(_))));
}

#[test]
fn test_pos_add() {
    assert_eq!(pos!(1, 2) + pos!(1, 1), pos!(2, 3));
}

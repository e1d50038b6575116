use std::{fmt, str::FromStr};

use tracing::{debug, trace};

use crate::{pos, world::State, Cell, Error, Pos, Result, SizeError};

const ALIVE_SYMBOL: char = '@';
const DEAD_SYMBOL: char = '+';
/// keeps `cell_count` within a 32 bit `usize`.
const MAX_SIDE: i64 = 1 << 15;

/// a validated board size, both sides positive and equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    x: usize,
    y: usize,
}

impl Size {
    pub fn new(x: i64, y: i64) -> Result<Self> {
        if x <= 0 || y <= 0 {
            Err(SizeError::NonPositive(x, y).into())
        } else if x != y {
            Err(SizeError::NotSquare(x, y).into())
        } else if x > MAX_SIDE {
            Err(SizeError::TooLarge(x, MAX_SIDE).into())
        } else {
            Ok(Self {
                x: x as usize,
                y: y as usize,
            })
        }
    }

    pub fn square(side: usize) -> Result<Self> {
        let side = i64::try_from(side).unwrap_or(i64::MAX);
        Self::new(side, side)
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn cell_count(&self) -> usize {
        self.x * self.y
    }
}

impl FromStr for Size {
    type Err = Error;

    /// accepts a single side (`"8"`) or both sides (`"8,8"`).
    fn from_str(s: &str) -> Result<Self> {
        let sides = s
            .split(',')
            .map(|side| {
                let side = side.trim();
                side.parse::<i64>()
                    .map_err(|_| SizeError::NotInteger(side.to_string()))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        match sides.as_slice() {
            &[side] => Self::new(side, side),
            &[x, y] => Self::new(x, y),
            other => Err(SizeError::Arity(other.len()).into()),
        }
    }
}

/// the square grid of cells and its generation counter.
///
/// the grid is indexed `[y][x]`; every cell stores the position it sits at.
/// Advancing builds a whole new grid from the current one and swaps it in, so
/// every neighbor count of a pass reads the same generation.
#[derive(Debug, Clone)]
pub struct Board {
    size: Size,
    generation: u64,
    grid: Vec<Vec<Cell>>,
    alive_symbol: char,
    dead_symbol: char,
}

fn blank_grid(size: Size) -> Vec<Vec<Cell>> {
    (0..size.y)
        .map(|y| (0..size.x).map(|x| Cell::dead(pos!(x, y))).collect())
        .collect()
}

impl Board {
    pub fn new((x, y): (i64, i64)) -> Result<Self> {
        Ok(Self::with_size(Size::new(x, y)?))
    }

    pub fn with_size(size: Size) -> Self {
        Self {
            size,
            generation: 0,
            grid: blank_grid(size),
            alive_symbol: ALIVE_SYMBOL,
            dead_symbol: DEAD_SYMBOL,
        }
    }

    pub fn size_x(&self) -> usize {
        self.size.x
    }

    pub fn size_y(&self) -> usize {
        self.size.y
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.size.cell_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// number of live cells in the current generation.
    pub fn population(&self) -> usize {
        self.cells().filter(|cell| cell.is_alive()).count()
    }

    pub fn set_symbols(&mut self, alive: char, dead: char) -> Result<()> {
        if alive == dead {
            return Err(Error::InvalidSymbols(alive));
        }
        self.alive_symbol = alive;
        self.dead_symbol = dead;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.iter().map(Vec::as_slice)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.iter().flatten()
    }

    /// gets the cell at a 0-based grid index.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell> {
        self.grid
            .get(y)
            .and_then(|row| row.get(x))
            .ok_or(Error::OutOfBounds {
                x: x as i64,
                y: y as i64,
            })
    }

    /// toggles the cell at 1-based coordinates.
    ///
    /// each component is shifted down by one and floored at zero before
    /// indexing, so both `(1, 1)` and `(0, 0)` target the top left cell.
    pub fn edit_cell(&mut self, (x, y): (i64, i64)) -> Result<()> {
        let index_x = x.saturating_sub(1).max(0);
        let index_y = y.saturating_sub(1).max(0);
        if index_x >= self.size.x as i64 || index_y >= self.size.y as i64 {
            return Err(Error::OutOfBounds { x, y });
        }

        let cell = &mut self.grid[index_y as usize][index_x as usize];
        cell.change_state(None);
        trace!(x = index_x, y = index_y, state = %cell.state(), "edited cell");
        Ok(())
    }

    /// counts the live cells of the Moore neighborhood of `(x, y)`.
    ///
    /// the window is clipped to the board, it never wraps around. A center
    /// outside the board is `OutOfBounds`.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> Result<usize> {
        self.cell_at(x, y)?;
        Ok(self.live_neighbors(x, y))
    }

    /// `x` and `y` must be on the board.
    fn live_neighbors(&self, x: usize, y: usize) -> usize {
        let last_x = self.size.x - 1;
        let last_y = self.size.y - 1;
        let columns = x.saturating_sub(1)..=x.saturating_add(1).min(last_x);
        let rows = y.saturating_sub(1)..=y.saturating_add(1).min(last_y);

        rows.flat_map(|j| columns.clone().map(move |i| pos!(i, j)))
            .filter(|&neighbor| neighbor != pos!(x, y))
            .filter(|&Pos { x, y }| self.grid[y][x].is_alive())
            .count()
    }

    /// computes the next generation and replaces the current one with it.
    pub fn advance(&mut self) {
        let mut next = blank_grid(self.size);

        for (y, row) in next.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                let neighbor_count = self.live_neighbors(x, y);
                let state = match (self.grid[y][x].state(), neighbor_count) {
                    (State::Alive, 2 | 3) => State::Alive, // stay
                    (State::Alive, _) => State::Dead,      // die
                    (State::Dead, 3) => State::Alive,      // becomes alive
                    (State::Dead, _) => State::Dead,       // stays dead
                };
                cell.change_state(Some(state));
            }
        }

        self.grid = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.population(),
            "advanced board"
        );
    }

    /// one line per row, each cell drawn with the alive or dead symbol.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                let symbol = if cell.is_alive() {
                    self.alive_symbol
                } else {
                    self.dead_symbol
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

use std::{fmt, str::FromStr};

use crate::{Error, Pos};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum State {
    Alive,
    #[default]
    Dead,
}

impl State {
    pub fn toggled(self) -> Self {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl FromStr for State {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alive" => Ok(State::Alive),
            "dead" => Ok(State::Dead),
            _ => Err(Error::InvalidState(s.to_string())),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Alive => write!(f, "alive"),
            State::Dead => write!(f, "dead"),
        }
    }
}

/// a single cell of the board. Its position is fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    state: State,
    pos: Pos,
}

impl Cell {
    pub fn new(state: State, pos: Pos) -> Self {
        Self { state, pos }
    }

    pub fn dead(pos: Pos) -> Self {
        Self::new(State::Dead, pos)
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_alive(&self) -> bool {
        self.state == State::Alive
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn x(&self) -> usize {
        self.pos.x
    }

    pub fn y(&self) -> usize {
        self.pos.y
    }

    /// sets the state when one is given, flips the current one otherwise.
    pub fn change_state(&mut self, state: Option<State>) {
        self.state = state.unwrap_or_else(|| self.state.toggled());
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Pos { x, y } = self.pos;
        write!(f, "Cell: State: {}, Position: X: {x}, Y: {y}", self.state)
    }
}

pub use board::{Board, Size};
mod board;

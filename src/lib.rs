//! the game of life on a finite square board.
//!
//! [`Board`] owns the grid and computes generations, the [`sim`] loop and the
//! [`view`] console drive it from a terminal.

pub use error::{Error, Result, SizeError};
mod error;

pub use utils::{parse_coords, Pos};
mod utils;

pub use world::{Board, Cell, Size, State};
pub mod world;

pub use sim::{Pace, Sim};
pub mod sim;

pub use view::{Console, TermConsole};
pub mod view;

pub use config::{Args, Config};
pub mod config;

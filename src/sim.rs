use std::time::Duration;

use tracing::warn;

use crate::{config::Config, parse_coords, view::Console, Board, Result};

/// how the loop moves from one generation to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pace {
    Auto(Duration),
    Manual,
}

/// drives a board through its generations on a console.
#[derive(Debug)]
pub struct Sim<C>
where
    C: Console,
{
    board: Board,
    console: C,
    pace: Pace,
    limit: Option<u64>,
}

impl<C> Sim<C>
where
    C: Console,
{
    pub fn new(board: Board, console: C, pace: Pace) -> Self {
        Self {
            board,
            console,
            pace,
            limit: None,
        }
    }

    /// builds the board described by a config and seeds its live cells.
    pub fn from_config(config: &Config, console: C) -> Result<Self> {
        let mut board = Board::with_size(config.size);
        let (alive, dead) = config.symbols;
        board.set_symbols(alive, dead)?;

        let mut sim =
            Self::new(board, console, config.pace).with_limit(config.generations);
        sim.seed(config.cells.iter().map(String::as_str))?;
        Ok(sim)
    }

    pub fn with_limit(mut self, limit: Option<u64>) -> Self {
        self.limit = limit;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// toggles the cell of every `x,y` token.
    ///
    /// bad tokens are reported on the console and skipped, the count of skipped
    /// tokens is returned.
    pub fn seed<'a>(&mut self, tokens: impl IntoIterator<Item = &'a str>) -> Result<usize> {
        let mut skipped = 0;
        for token in tokens {
            let edited = parse_coords(token).and_then(|coords| self.board.edit_cell(coords));
            if let Err(error) = edited {
                warn!(token, %error, "skipping cell");
                self.console
                    .println(&format!("Invalid coordinates provided: {token}"))?;
                skipped += 1;
            }
        }
        Ok(skipped)
    }

    /// runs until the generation limit is displayed or the player quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.display()?;
            if self
                .limit
                .is_some_and(|limit| self.board.generation() >= limit)
            {
                break;
            }

            match self.pace {
                Pace::Auto(delay) => self.console.sleep(delay),
                Pace::Manual => {
                    let line = self.console.prompt("ENTER for next generation.")?;
                    if matches!(line.as_deref().map(str::trim), None | Some("q")) {
                        self.goodbye()?;
                        break;
                    }
                }
            }

            self.board.advance();
        }
        Ok(())
    }

    fn display(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.print(&self.board.render())?;
        self.console.print("\n\n\n\n")?;
        self.console
            .println(&format!("Generation: {}", self.board.generation()))?;
        Ok(())
    }

    fn goodbye(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.println("Thanks for playing!")?;
        self.console.println("Good Bye...")?;
        Ok(())
    }
}

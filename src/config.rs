use std::{fs, io, time::Duration};

use docopt::Docopt;
use serde::Deserialize;

use crate::{pos, sim::Pace, view::Console, Error, Pos, Result, Size};

pub const USAGE: &str = "squarelife

Runs the game of life on a finite square board in the terminal.
Any setting left out on the command line is asked for interactively.

Usage:
    squarelife [--auto | --manual] [options]
    squarelife (-h | --help)

Options:
    -h --help            Show this screen.
    --size=<n>           Board side length, or `x,y` with both sides equal.
    --auto               Advance on its own every --delay milliseconds.
    --manual             Wait for ENTER before each generation, `q` quits.
    --delay=<ms>         Pause between automatic generations [default: 1000].
    --cells=<coords>     Space separated 1-based `x,y` pairs of live cells.
    --pattern=<path>     Text file of live cells, `#` marks a live cell.
    --generations=<n>    Stop after displaying generation n.
    --alive=<c>          Symbol of live cells [default: @].
    --dead=<c>           Symbol of dead cells [default: +].
";

#[derive(Debug, Deserialize)]
pub struct Args {
    flag_size: Option<String>,
    flag_auto: bool,
    flag_manual: bool,
    flag_delay: u64,
    flag_cells: Option<String>,
    flag_pattern: Option<String>,
    flag_generations: Option<u64>,
    flag_alive: char,
    flag_dead: char,
}

impl Args {
    pub fn parse<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args = Docopt::new(USAGE)?
            .argv(argv)
            .help(true)
            .deserialize()?;
        Ok(args)
    }
}

/// everything needed to set up a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub size: Size,
    pub pace: Pace,
    /// 1-based `x,y` tokens, each toggles one cell.
    pub cells: Vec<String>,
    pub generations: Option<u64>,
    pub symbols: (char, char),
}

const SIZE_PROMPT: &str = "Enter Board Size (only 1 number): ";
const PACE_PROMPT: &str = "Automatically Generate? (Y/N): ";
const CELLS_PROMPT: &str = "Enter the coordinates of the alive cells (x1,y1 x2,y2 ...): ";

impl Config {
    /// resolves the arguments, asking the console for whatever is missing.
    pub fn resolve(args: Args, console: &mut impl Console) -> Result<Self> {
        let pattern = match &args.flag_pattern {
            Some(path) => Some(deserialize(&fs::read_to_string(path)?)),
            None => None,
        };

        let size = match (&args.flag_size, &pattern) {
            (Some(size), _) => size.parse::<Size>()?,
            (None, Some(actives)) if !actives.is_empty() => pattern_size(actives)?,
            _ => {
                let answer = ask(console, SIZE_PROMPT)?;
                let side = answer
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| Error::InvalidNumber(answer.clone()))?;
                Size::new(side, side)?
            }
        };

        let pace = match (args.flag_auto, args.flag_manual) {
            (true, _) => Pace::Auto(Duration::from_millis(args.flag_delay)),
            (_, true) => Pace::Manual,
            _ => {
                let answer = ask(console, PACE_PROMPT)?;
                match answer.trim().to_lowercase().as_str() {
                    "y" => Pace::Auto(Duration::from_millis(args.flag_delay)),
                    "n" => Pace::Manual,
                    _ => return Err(Error::InvalidMode(answer)),
                }
            }
        };

        let mut cells: Vec<String> = pattern
            .iter()
            .flatten()
            .map(|&pos| {
                let Pos { x, y } = pos + pos!(1, 1);
                format!("{x},{y}")
            })
            .collect();
        match &args.flag_cells {
            Some(tokens) => cells.extend(tokens.split_whitespace().map(str::to_string)),
            None if pattern.is_none() => {
                let answer = ask(console, CELLS_PROMPT)?;
                cells.extend(answer.split_whitespace().map(str::to_string));
            }
            None => (),
        }

        Ok(Self {
            size,
            pace,
            cells,
            generations: args.flag_generations,
            symbols: (args.flag_alive, args.flag_dead),
        })
    }
}

fn ask(console: &mut impl Console, question: &str) -> Result<String> {
    console
        .prompt(question)?
        .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into())
}

/// reads a text pattern where `#` is a live cell and each line is a row.
fn deserialize(str: &str) -> Vec<Pos> {
    let mut result = vec![];
    let mut pos = pos!(0, 0);
    for c in str.chars() {
        match c {
            '#' => {
                result.push(pos);
                pos.x += 1
            }
            '\n' => pos = pos!(0, pos.y + 1),
            '\r' => (),
            _ => pos.x += 1,
        }
    }
    result
}

/// the smallest square holding every cell of a pattern.
fn pattern_size(actives: &[Pos]) -> Result<Size> {
    let side = actives
        .iter()
        .map(|&Pos { x, y }| x.max(y) + 1)
        .max()
        .unwrap_or(1);
    Size::square(side)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::view::tests::ScriptedConsole;

    fn args(argv: &[&str]) -> Args {
        let argv = std::iter::once("squarelife").chain(argv.iter().copied());
        Args::parse(argv).unwrap()
    }

    #[test]
    fn flags_skip_every_prompt() {
        let mut console = ScriptedConsole::default();
        let config = Config::resolve(
            args(&["--auto", "--size=6", "--cells=1,1 2,2", "--delay=50"]),
            &mut console,
        )
        .unwrap();
        assert_eq!(config.size, Size::square(6).unwrap());
        assert_eq!(config.pace, Pace::Auto(Duration::from_millis(50)));
        assert_eq!(config.cells, vec!["1,1", "2,2"]);
        assert_eq!(config.symbols, ('@', '+'));
        assert_eq!(config.generations, None);
        assert!(console.output.is_empty());
    }

    #[test]
    fn missing_settings_are_prompted_in_order() {
        let mut console = ScriptedConsole::with_input(&["8", "n", "1,2 3,4"]);
        let config = Config::resolve(args(&["--generations=3"]), &mut console).unwrap();
        assert_eq!(config.size, Size::square(8).unwrap());
        assert_eq!(config.pace, Pace::Manual);
        assert_eq!(config.cells, vec!["1,2", "3,4"]);
        assert_eq!(config.generations, Some(3));
        assert_eq!(console.output, [SIZE_PROMPT, PACE_PROMPT, CELLS_PROMPT].concat());
    }

    #[test]
    fn pace_answer_folds_case() {
        let mut console = ScriptedConsole::with_input(&["Y", ""]);
        let config = Config::resolve(args(&["--size=3"]), &mut console).unwrap();
        assert_eq!(config.pace, Pace::Auto(Duration::from_millis(1000)));
        assert!(config.cells.is_empty());
    }

    #[test]
    fn bad_answers_are_errors() {
        let mut console = ScriptedConsole::with_input(&["ten"]);
        assert!(matches!(
            Config::resolve(args(&[]), &mut console),
            Err(Error::InvalidNumber(_))
        ));

        let mut console = ScriptedConsole::with_input(&["-2"]);
        assert!(matches!(
            Config::resolve(args(&[]), &mut console),
            Err(Error::InvalidSize(_))
        ));

        let mut console = ScriptedConsole::with_input(&["4", "maybe"]);
        assert!(matches!(
            Config::resolve(args(&[]), &mut console),
            Err(Error::InvalidMode(answer)) if answer == "maybe"
        ));

        assert!(matches!(
            Config::resolve(args(&["--size=3,4"]), &mut ScriptedConsole::default()),
            Err(Error::InvalidSize(_))
        ));
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut console = ScriptedConsole::default();
        assert!(matches!(
            Config::resolve(args(&[]), &mut console),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn unknown_flags_are_rejected() {
        let argv = ["squarelife", "--speed=3"];
        assert!(matches!(Args::parse(argv), Err(Error::Args(_))));
    }

    #[test]
    fn pattern_file_sizes_and_seeds_the_board() {
        let path = std::env::temp_dir().join(format!("squarelife-{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        write!(file, "..#\n###\n").unwrap();
        drop(file);

        let flag = format!("--pattern={}", path.display());
        let config =
            Config::resolve(args(&["--manual", &flag]), &mut ScriptedConsole::default()).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.size, Size::square(3).unwrap());
        assert_eq!(config.cells, vec!["3,1", "1,2", "2,2", "3,2"]);
    }

    #[test]
    fn test_deserialize() {
        assert_eq!(
            deserialize("#.\r\n.#\n"),
            vec![pos!(0, 0), pos!(1, 1)]
        );
        assert!(deserialize("...\n").is_empty());
    }

    #[test]
    fn test_pattern_size() {
        assert_eq!(
            pattern_size(&[pos!(4, 1), pos!(0, 2)]).unwrap(),
            Size::square(5).unwrap()
        );
    }
}

use std::{
    io::{self, stdin, stdout, BufRead, Stdin, Stdout, Write},
    thread,
    time::Duration,
};

/// the side effects the driver needs from a terminal.
pub trait Console {
    fn clear(&mut self) -> io::Result<()>;
    fn print(&mut self, text: &str) -> io::Result<()>;
    /// `None` when the input is closed or the prompt was aborted.
    fn read_line(&mut self) -> io::Result<Option<String>>;
    fn sleep(&mut self, duration: Duration);

    fn println(&mut self, text: &str) -> io::Result<()> {
        self.print(text)?;
        self.print("\n")
    }

    fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        self.print(question)?;
        self.read_line()
    }
}

pub struct TermConsole {
    stdin: Stdin,
    stdout: Stdout,
}

impl TermConsole {
    pub fn new() -> Self {
        Self {
            stdin: stdin(),
            stdout: stdout(),
        }
    }
}

impl Default for TermConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TermConsole {
    fn clear(&mut self) -> io::Result<()> {
        let clear = termion::clear::All;
        let home = termion::cursor::Goto(1, 1);
        write!(self.stdout, "{clear}{home}")?;
        self.stdout.flush()
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.stdout, "{text}")?;
        self.stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        read_line_from(&mut self.stdin.lock())
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration)
    }
}

/// reads one line without its line ending, `None` once the input is exhausted.
fn read_line_from(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(len);
    Ok(Some(line))
}

#[cfg(test)]
pub mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// an in-memory console fed with scripted input lines.
    #[derive(Debug, Default)]
    pub struct ScriptedConsole {
        pub input: VecDeque<String>,
        pub output: String,
        pub clears: usize,
        pub slept: Vec<Duration>,
    }

    impl ScriptedConsole {
        pub fn with_input(lines: &[&str]) -> Self {
            Self {
                input: lines.iter().map(|line| line.to_string()).collect(),
                ..Self::default()
            }
        }
    }

    impl Console for ScriptedConsole {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn print(&mut self, text: &str) -> io::Result<()> {
            self.output += text;
            Ok(())
        }

        fn read_line(&mut self) -> io::Result<Option<String>> {
            Ok(self.input.pop_front())
        }

        fn sleep(&mut self, duration: Duration) {
            self.slept.push(duration)
        }
    }

    #[test]
    fn read_line_from_strips_endings_and_reports_end_of_input() {
        let mut input: &[u8] = b"3\r\n\nq";
        assert_eq!(read_line_from(&mut input).unwrap().as_deref(), Some("3"));
        assert_eq!(read_line_from(&mut input).unwrap().as_deref(), Some(""));
        assert_eq!(read_line_from(&mut input).unwrap().as_deref(), Some("q"));
        assert_eq!(read_line_from(&mut input).unwrap(), None);

        let mut closed: &[u8] = b"";
        assert_eq!(read_line_from(&mut closed).unwrap(), None);
    }

    #[test]
    fn prompt_prints_then_reads() {
        let mut console = ScriptedConsole::with_input(&["12"]);
        let answer = console.prompt("size? ").unwrap();
        assert_eq!(answer.as_deref(), Some("12"));
        assert_eq!(console.output, "size? ");
        assert_eq!(console.prompt("again? ").unwrap(), None);
    }
}

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

/// Console handles all line-oriented terminal I/O for the menu loop.
///
/// Generic over its reader and writer so the loop can be driven by scripted
/// input in tests.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process stdin/stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print a line
    pub fn println(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{message}")
    }

    /// Print `label` and read one line of input.
    ///
    /// Returns `None` at end of input. The line terminator is stripped; all
    /// other characters are returned as typed.
    pub fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Like [`Console::prompt`], but blank input means "no value".
    ///
    /// Outer `None` is end of input, inner `None` is a blank answer.
    pub fn prompt_optional(&mut self, label: &str) -> io::Result<Option<Option<String>>> {
        Ok(self.prompt(label)?.map(non_blank))
    }

    /// Consume the console and return the writer (used to inspect captured output)
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Treat empty or whitespace-only input as absent
pub fn non_blank(input: String) -> Option<String> {
    if input.trim().is_empty() {
        None
    } else {
        Some(input)
    }
}

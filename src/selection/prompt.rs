//! The decision protocol between the selector and a human.

use std::io::{BufRead, Write};

use discmatch_common::{Error, Result};

/// Answer to a pick-one question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Use the option at this index (0-based).
    Pick(usize),
    /// Print the decision log of the option at this index, then ask again.
    ShowLog(usize),
    /// Use none of the options.
    Skip,
}

/// Something that can put questions to a human.
///
/// Implementations return [`Error::Cancelled`] when the human cannot or will
/// not answer (end of input, interrupt, timeout). Declining is not a
/// cancellation: it is `Ok(false)` or `Ok(Choice::Skip)`.
pub trait Prompter {
    /// Display informational text.
    fn show(&mut self, message: &str) -> Result<()>;

    /// Ask a yes/no question.
    fn ask_yes_no(&mut self, question: &str) -> Result<bool>;

    /// Ask the human to pick one of `options`.
    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<Choice>;
}

/// Line-based prompter over any reader/writer pair.
pub struct TerminalPrompter<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompter on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the prompter, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(Error::Cancelled);
        }
        Ok(line.trim().to_lowercase())
    }

    fn parse_index(answer: &str, len: usize) -> Option<usize> {
        answer
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=len).contains(n))
            .map(|n| n - 1)
    }
}

impl<R: BufRead, W: Write> Prompter for TerminalPrompter<R, W> {
    fn show(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool> {
        loop {
            match self.read_answer(&format!("{} (y/n): ", question))?.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please enter 'y' or 'n'.")?,
            }
        }
    }

    fn ask_choice(&mut self, prompt: &str, options: &[String]) -> Result<Choice> {
        writeln!(self.output, "{}", prompt)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, option)?;
        }

        loop {
            writeln!(
                self.output,
                "Enter the number of the release to use, 'p' to print logs for a release, or 'n' to skip:"
            )?;
            let answer = self.read_answer("Selection: ")?;

            match answer.as_str() {
                "n" => return Ok(Choice::Skip),
                "p" => {
                    let which = self.read_answer(&format!(
                        "Enter the release number (1-{}) to print logs: ",
                        options.len()
                    ))?;
                    match Self::parse_index(&which, options.len()) {
                        Some(idx) => return Ok(Choice::ShowLog(idx)),
                        None => writeln!(
                            self.output,
                            "Invalid selection. Please enter a number between 1 and {}.",
                            options.len()
                        )?,
                    }
                }
                other => match Self::parse_index(other, options.len()) {
                    Some(idx) => return Ok(Choice::Pick(idx)),
                    None => writeln!(
                        self.output,
                        "Invalid selection. Please enter a number between 1 and {}, or 'n'.",
                        options.len()
                    )?,
                },
            }
        }
    }
}

//! Interactive editing of a configuration's email list

use crate::domain::EditCommand;
use crate::error::Result;
use std::io::{BufRead, Write};

pub const PROMPT: &str =
    "===\na <emails>... (add), d <nb> (delete), c <nb> <new> (change), empty to confirm\n> ";

/// Line-oriented edit loop over any input/output pair
pub struct EditSession<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> EditSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        EditSession { input, output }
    }

    /// Run passes until one leaves the list unchanged.
    ///
    /// After an edit, a single empty line finishes the session.
    pub fn run(&mut self, mut emails: Vec<String>) -> Result<Vec<String>> {
        loop {
            let previous = emails.clone();
            emails = self.run_pass(emails)?;
            if emails == previous {
                return Ok(emails);
            }
        }
    }

    /// Read lines until one parses and applies, then return the list.
    ///
    /// Invalid commands are reported and re-prompted with the list untouched.
    /// An empty line (or end of input) returns the list as is.
    pub fn run_pass(&mut self, mut emails: Vec<String>) -> Result<Vec<String>> {
        loop {
            self.show(&emails)?;

            let mut line = String::new();
            self.input.read_line(&mut line)?;

            let outcome = EditCommand::parse(&line, emails.len()).and_then(|command| {
                tracing::debug!(?command, "applying edit");
                command.apply(&mut emails)
            });

            match outcome {
                Ok(()) => return Ok(emails),
                Err(e) => writeln!(self.output, "/!\\ {}", e)?,
            }
        }
    }

    fn show(&mut self, emails: &[String]) -> Result<()> {
        for (i, email) in emails.iter().enumerate() {
            writeln!(self.output, "{}) {}", i, email)?;
        }
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

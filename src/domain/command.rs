//! Edit commands accepted by the interactive email session

use thiserror::Error;

/// Recoverable input errors; the session reports them and re-prompts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Not a valid integer: `{0}`")]
    InvalidIndexSyntax(String),

    #[error("Out of bounds: {index} (list has {len} emails)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Missing new email")]
    MissingArgument,

    #[error("Invalid command `{0}`")]
    UnrecognizedCommand(String),
}

/// One parsed line of operator input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditCommand {
    /// Append every email, in order
    Add(Vec<String>),
    /// Remove the email at this index
    Delete(usize),
    /// Replace the email at this index
    Change(usize, String),
    /// Empty line, ends the pass
    Confirm,
}

impl EditCommand {
    /// Parse a line against a list currently holding `len` emails.
    ///
    /// Index checks happen here so errors are reported in the order the
    /// operator would hit them: syntax, bounds, then a missing replacement.
    pub fn parse(input: &str, len: usize) -> Result<Self, EditError> {
        let tokens: Vec<&str> = input.split_whitespace().collect();

        match tokens.as_slice() {
            [] => Ok(EditCommand::Confirm),
            ["a", emails @ ..] if !emails.is_empty() => Ok(EditCommand::Add(
                emails.iter().map(|e| e.to_string()).collect(),
            )),
            [op @ ("c" | "d"), index, rest @ ..] => {
                let index = Self::parse_index(index, len)?;
                if *op == "d" {
                    return Ok(EditCommand::Delete(index));
                }
                match rest.first() {
                    Some(email) => Ok(EditCommand::Change(index, email.to_string())),
                    None => Err(EditError::MissingArgument),
                }
            }
            _ => Err(EditError::UnrecognizedCommand(tokens.join(" "))),
        }
    }

    fn parse_index(token: &str, len: usize) -> Result<usize, EditError> {
        let index: usize = token
            .parse()
            .map_err(|_| EditError::InvalidIndexSyntax(token.to_string()))?;
        if index >= len {
            return Err(EditError::IndexOutOfBounds { index, len });
        }
        Ok(index)
    }

    /// Apply this command to the list in place
    pub fn apply(self, emails: &mut Vec<String>) -> Result<(), EditError> {
        let len = emails.len();
        match self {
            EditCommand::Add(new) => emails.extend(new),
            EditCommand::Delete(index) if index < len => {
                emails.remove(index);
            }
            EditCommand::Change(index, email) if index < len => emails[index] = email,
            EditCommand::Delete(index) | EditCommand::Change(index, _) => {
                return Err(EditError::IndexOutOfBounds { index, len })
            }
            EditCommand::Confirm => {}
        }
        Ok(())
    }
}

//! Tokenizing a line of user input.

use crate::error::{CommandError, CommandResult};

/// A line split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased command word.
    pub command: String,
    /// Remaining whitespace-separated tokens, case preserved.
    pub args: Vec<String>,
}

/// Split `line` on whitespace into a command word and its arguments.
///
/// # Errors
///
/// Returns `CommandError::MissingArgument` if the line holds no tokens.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next().ok_or(CommandError::MissingArgument)?;

    Ok(ParsedInput {
        command: command.to_lowercase(),
        args: tokens.map(str::to_string).collect(),
    })
}

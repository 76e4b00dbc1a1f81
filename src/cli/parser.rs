//! Tokenizing of assistant input lines.

use crate::error::{CommandError, CommandResult};

/// A command word and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Lower-cased first word
    pub command: String,

    /// Remaining whitespace-separated words, as typed
    pub args: Vec<String>,
}

/// Split a line into a lower-cased command and its arguments.
///
/// # Errors
///
/// Returns `CommandError::EmptyInput` for a blank line.
pub fn parse_input(line: &str) -> CommandResult<ParsedInput> {
    let mut words = line.split_whitespace();
    let command = words.next().ok_or(CommandError::EmptyInput)?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Ok(ParsedInput { command, args })
}

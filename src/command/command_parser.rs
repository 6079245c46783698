use crate::core::types::MenuCommand;
use crate::errors::{Error, Result};
use crate::extensions::enums::valid_csv;

/// Outcome of reading a command token. Anything outside the menu is kept as `Unknown`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedCommand {
    Menu(MenuCommand),
    Unknown(String),
}

impl ParsedCommand {
    pub fn into_result(self) -> Result<MenuCommand> {
        match self {
            ParsedCommand::Menu(cmd) => Ok(cmd),
            ParsedCommand::Unknown(token) => Err(Error::unknown(token, valid_csv::<MenuCommand>())),
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct CommandParser;

impl CommandParser {
    pub fn new() -> Self {
        Self
    }

    /// Trims and case-folds `input` before matching it against the menu.
    pub fn parse(&self, input: &str) -> ParsedCommand {
        let token = input.trim();
        match MenuCommand::try_from(token) {
            Ok(cmd) => ParsedCommand::Menu(cmd),
            Err(_) => ParsedCommand::Unknown(token.to_string()),
        }
    }
}

//! Keyword classification of chat messages

use thiserror::Error;

/// What a chat message asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `save <url> <name> ...`
    Save { url: String, name: String },
    /// `retrieve|get <any> <name> ...`
    Retrieve { name: String },
    /// Anything else, forwarded to the intent classifier as-is
    Freeform(String),
}

/// Errors produced while extracting command arguments
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("'{command}' needs at least {expected} words, got {found}")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        found: usize,
    },
}

const SAVE: &str = "save";
const RETRIEVE: &str = "retrieve";
const GET: &str = "get";

// Arguments are positional. Save reads the url at 1 and the name at 2, while
// retrieve reads the name at 2 and ignores 1 ("get image cat").
const SAVE_URL_INDEX: usize = 1;
const SAVE_NAME_INDEX: usize = 2;
const RETRIEVE_NAME_INDEX: usize = 2;

/// Classify a message into a [`Command`]
///
/// Keywords are matched case-insensitively anywhere in the message, so
/// "get" also fires inside words like "forget". When several keywords are
/// present `save` wins over `retrieve`, which wins over `get`.
pub fn parse_command(message: &str) -> Result<Command, CommandError> {
    let lowered = message.to_lowercase();

    if lowered.contains(SAVE) {
        let args = tokens(message, SAVE, SAVE_NAME_INDEX)?;
        return Ok(Command::Save {
            url: args[SAVE_URL_INDEX].to_string(),
            name: args[SAVE_NAME_INDEX].to_string(),
        });
    }

    if lowered.contains(RETRIEVE) || lowered.contains(GET) {
        let command = if lowered.contains(RETRIEVE) { RETRIEVE } else { GET };
        let args = tokens(message, command, RETRIEVE_NAME_INDEX)?;
        return Ok(Command::Retrieve {
            name: args[RETRIEVE_NAME_INDEX].to_string(),
        });
    }

    Ok(Command::Freeform(message.to_string()))
}

/// Split on whitespace, requiring a token at `last_index`
fn tokens<'a>(
    message: &'a str,
    command: &'static str,
    last_index: usize,
) -> Result<Vec<&'a str>, CommandError> {
    let tokens: Vec<&str> = message.split_whitespace().collect();
    if tokens.len() <= last_index {
        return Err(CommandError::MissingArgument {
            command,
            expected: last_index + 1,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

use crate::commands::find::{FindCommand, MESSAGE_USAGE};
use crate::commands::invalid_command_format;
use crate::error::{Result, TutorbookError};

pub fn parse(args: &str) -> Result<FindCommand> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE)));
    }
    Ok(FindCommand::new(keywords))
}

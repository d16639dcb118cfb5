use super::util::parse_index;
use crate::commands::delete::{DeleteCommand, MESSAGE_USAGE};
use crate::commands::invalid_command_format;
use crate::error::{Result, TutorbookError};

pub fn parse(args: &str) -> Result<DeleteCommand> {
    let index = parse_index(args)
        .map_err(|_| TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE)))?;
    Ok(DeleteCommand::new(index))
}

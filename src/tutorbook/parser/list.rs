use crate::commands::invalid_command_format;
use crate::commands::list::{ListCommand, MESSAGE_USAGE};
use crate::error::{Result, TutorbookError};
use crate::model::PersonType;

pub fn parse(args: &str) -> Result<ListCommand> {
    let role = match args.trim().to_lowercase().as_str() {
        "" => None,
        "student" | "students" => Some(PersonType::Student),
        "parent" | "parents" => Some(PersonType::Parent),
        _ => {
            return Err(TutorbookError::Parse(invalid_command_format(
                MESSAGE_USAGE,
            )))
        }
    };
    Ok(ListCommand::new(role))
}

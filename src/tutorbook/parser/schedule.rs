use super::syntax::PREFIX_SCHEDULE;
use super::tokenizer::tokenize;
use super::util::parse_index;
use crate::commands::invalid_command_format;
use crate::commands::schedule::{ScheduleCommand, MESSAGE_USAGE};
use crate::error::{Result, TutorbookError};
use crate::model::Schedule;

/// `schedule INDEX [s/SCHEDULE]`. An empty or missing `s/` clears the schedule.
pub fn parse(args: &str) -> Result<ScheduleCommand> {
    let map = tokenize(args, &[PREFIX_SCHEDULE]);

    let index = parse_index(map.preamble())
        .map_err(|_| TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE)))?;
    map.verify_no_duplicate_prefixes(&[PREFIX_SCHEDULE])?;

    let schedule = Schedule::new(map.value(PREFIX_SCHEDULE).unwrap_or(""));
    Ok(ScheduleCommand::new(index, schedule))
}

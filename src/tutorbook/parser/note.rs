use super::syntax::PREFIX_NOTE;
use super::tokenizer::tokenize;
use super::util::{parse_index, parse_note};
use crate::commands::invalid_command_format;
use crate::commands::note::{NoteCommand, MESSAGE_USAGE};
use crate::error::{Result, TutorbookError};

/// `note INDEX [nt/NOTE]`. A missing `nt/` and an empty `nt/` both clear the note.
pub fn parse(args: &str) -> Result<NoteCommand> {
    let map = tokenize(args, &[PREFIX_NOTE]);

    let index = parse_index(map.preamble())
        .map_err(|_| TutorbookError::Parse(invalid_command_format(MESSAGE_USAGE)))?;
    map.verify_no_duplicate_prefixes(&[PREFIX_NOTE])?;

    let note = parse_note(map.value(PREFIX_NOTE).unwrap_or(""))?;
    Ok(NoteCommand::new(index, note))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::model::Note;

    #[test]
    fn parses_index_and_note() {
        assert_eq!(
            parse(" 1 nt/Likes to swim.").unwrap(),
            NoteCommand::new(Index::from_one_based(1), Note::new("Likes to swim."))
        );
    }

    #[test]
    fn empty_and_absent_prefix_are_equivalent() {
        let empty = parse(" 1 nt/").unwrap();
        let absent = parse(" 1").unwrap();
        assert_eq!(empty, absent);
        assert_eq!(absent, NoteCommand::new(Index::from_one_based(1), Note::new("")));
    }

    #[test]
    fn bad_index_reports_usage() {
        for args in ["", " nt/hello", " 0 nt/x", " -1 nt/x", " abc nt/x", " 1 2 nt/x"] {
            let err = parse(args).unwrap_err();
            assert_eq!(
                err.to_string(),
                invalid_command_format(MESSAGE_USAGE),
                "args: {:?}",
                args
            );
        }
    }

    #[test]
    fn overlong_note_is_rejected() {
        let args = format!(" 1 nt/{}", "a".repeat(100));
        assert!(matches!(parse(&args), Err(TutorbookError::Parse(_))));
        let args = format!(" 1 nt/{}", "a".repeat(99));
        assert!(parse(&args).is_ok());
    }
}

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Model, PersonFilter};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find: Finds all persons whose names contain any of the \
specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find amy bob";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    keywords: Vec<String>,
}

impl FindCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }

    pub fn execute(&self, model: &mut Model) -> Result<CmdResult> {
        model.update_filter(PersonFilter::NameKeywords(self.keywords.clone()));
        let count = model.filtered_persons().len();
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!("{} persons listed!", count)))
            .with_listing())
    }
}

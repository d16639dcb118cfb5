use super::json::JsonAddressBook;
use super::AddressBookStore;
use crate::error::{Result, TutorbookError};
use crate::model::Person;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Stores the whole address book in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TutorbookError::Io)?;
            }
        }
        Ok(())
    }
}

impl AddressBookStore for FileStore {
    fn load(&self) -> Result<Vec<Person>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(TutorbookError::Io)?;
        let book: JsonAddressBook =
            serde_json::from_str(&content).map_err(TutorbookError::Serialization)?;
        let persons = book.to_persons()?;
        debug!(path = %self.path.display(), count = persons.len(), "loaded address book");
        Ok(persons)
    }

    fn save(&mut self, persons: &[Person]) -> Result<()> {
        self.ensure_parent_dir()?;
        let book = JsonAddressBook::from_persons(persons);
        let content =
            serde_json::to_string_pretty(&book).map_err(TutorbookError::Serialization)?;
        fs::write(&self.path, content).map_err(TutorbookError::Io)?;
        debug!(path = %self.path.display(), count = persons.len(), "saved address book");
        Ok(())
    }
}

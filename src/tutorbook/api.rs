//! # API Facade
//!
//! The API layer is a **thin facade** over the parser and command layers. It
//! is the single entry point for every UI: hand it a line of text, get back a
//! [`CmdResult`] or an error to display.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Parses** the raw text into a command
//! - **Executes** the command against the model it owns
//! - **Persists** the master list after a successful mutating command
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs`
//! - **I/O to the terminal**: no stdout, stderr, or formatting
//!
//! ## Generic Over AddressBookStore
//!
//! `TutorbookApi<S: AddressBookStore>`:
//! - Production: `TutorbookApi<FileStore>`
//! - Testing: `TutorbookApi<InMemoryStore>`

use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{Model, Person};
use crate::parser;
use crate::store::AddressBookStore;
use tracing::{debug, info};

pub use crate::commands::{CmdMessage, MessageLevel};

pub struct TutorbookApi<S: AddressBookStore> {
    store: S,
    model: Model,
}

impl<S: AddressBookStore> TutorbookApi<S> {
    /// Seeds the model from `store`.
    pub fn new(store: S) -> Result<Self> {
        let persons = store.load()?;
        info!(count = persons.len(), "address book loaded");
        Ok(Self {
            store,
            model: Model::new(persons),
        })
    }

    /// Parses and runs one line of user input.
    ///
    /// A failed parse, a failed command or a failed save leaves both the
    /// model and the store untouched. The command runs on a copy of the
    /// model, which replaces it only once the store has accepted the result.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let command = parser::parse_command(input)?;
        debug!(command = command.word(), "executing");

        let mut next = self.model.clone();
        let result = command.execute(&mut next)?;
        if command.mutates() {
            self.store.save(next.persons())?;
            debug!(count = next.persons().len(), "address book saved");
        }
        self.model = next;
        Ok(result)
    }

    /// What the user currently sees, in display order.
    pub fn displayed_persons(&self) -> Vec<&Person> {
        self.model.filtered_persons()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

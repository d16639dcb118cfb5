//! # Storage Layer
//!
//! The core never reads or writes files itself. At startup the API asks an
//! [`AddressBookStore`] for the persons to seed the model with, and after
//! every command that changed the master list it hands the whole list back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single pretty-printed JSON file
//! - [`memory::InMemoryStore`]: no persistence, for tests
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "persons": [
//!     { "type": "student", "name": "Amy", "phone": "94351253", ...,
//!       "schedule": "Mon 1500-1700", "cost": "50", "paymentStatus": "unpaid",
//!       "note": "Likes to swim.", "tags": ["swimming"] }
//!   ]
//! }
//! ```
//!
//! Records are decoded through [`json::JsonPerson`], which is where absent
//! fields are detected and stored values are re-validated.

use crate::error::Result;
use crate::model::Person;

pub mod fs;
pub mod json;
pub mod memory;

pub trait AddressBookStore {
    /// Every stored person, in stored order. An empty store yields an empty list.
    fn load(&self) -> Result<Vec<Person>>;

    /// Replaces the stored list with `persons`.
    fn save(&mut self, persons: &[Person]) -> Result<()>;
}

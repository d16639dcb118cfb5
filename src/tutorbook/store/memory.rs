use super::AddressBookStore;
use crate::error::Result;
use crate::model::Person;

/// Keeps the address book in memory only. Counts saves so tests can tell
/// whether a command was persisted.
#[derive(Debug)]
pub struct InMemoryStore {
    persons: Vec<Person>,
    saves: usize,
}

impl InMemoryStore {
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self { persons, saves: 0 }
    }

    /// How many times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl AddressBookStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Person>> {
        Ok(self.persons.clone())
    }

    fn save(&mut self, persons: &[Person]) -> Result<()> {
        self.persons = persons.to_vec();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::amy;

    #[test]
    fn save_replaces_contents() {
        let mut store = InMemoryStore::with_persons(vec![amy()]);
        assert_eq!(store.load().unwrap().len(), 1);

        store.save(&[]).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.saves(), 1);
    }
}

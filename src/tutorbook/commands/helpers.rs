use crate::commands::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX;
use crate::error::{Result, TutorbookError};
use crate::index::Index;
use crate::model::{Model, Person};

/// Resolves a user index against the displayed (filtered) list.
///
/// Returns an owned copy so the caller can mutate the model afterwards.
pub fn displayed_person(model: &Model, index: Index) -> Result<Person> {
    model
        .filtered_persons()
        .get(index.zero_based())
        .map(|person| (*person).clone())
        .ok_or_else(|| {
            TutorbookError::Command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::typical_model;
    use crate::model::{PersonFilter, PersonType};

    #[test]
    fn resolves_against_filtered_list() {
        let mut model = typical_model();
        model.update_filter(PersonFilter::Role(PersonType::Student));

        let second = displayed_person(&model, Index::from_one_based(2)).unwrap();
        assert_eq!(second.name().as_str(), "Carl Kurz");
        assert!(displayed_person(&model, Index::from_one_based(3)).is_err());
    }
}

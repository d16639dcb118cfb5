use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorbookError {
    #[error("Person's {0} field is missing!")]
    MissingField(&'static str),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Command(String),

    #[error("Person not found: {0}")]
    PersonNotFound(String),

    #[error("This person already exists in the address book: {0}")]
    DuplicatePerson(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, TutorbookError>;

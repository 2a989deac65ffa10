use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Record not found")]
    NotFound,
    #[error("Unknown admin model: {0}")]
    UnknownEntity(String),
    #[error("Field '{0}' is not editable from the list view")]
    NotEditable(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

use crate::domain::ports::completion::CompletionError;
use crate::domain::ports::document_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Document store error: {0}")]
    Store(String),

    #[error("Completion error: {0}")]
    Completion(String),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        DomainError::Store(e.to_string())
    }
}

impl From<CompletionError> for DomainError {
    fn from(e: CompletionError) -> Self {
        DomainError::Completion(e.to_string())
    }
}

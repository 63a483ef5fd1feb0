use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    /// A by-id operation targeted a customer or product that does not exist.
    #[error("{0} not found.")]
    NotFound(&'static str),
    #[error("Customer not found.")]
    CustomerNotFound(Uuid),
    #[error("Product with ID {0} not found.")]
    ProductNotFound(Uuid),
    #[error("{0}")]
    Conflict(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid pagination: {0}")]
    InvalidPagination(String),

    /// Every prefix/suffix combination is already taken.
    #[error("Customer name space exhausted: all {capacity} unique names are in use")]
    NameSpaceExhausted { capacity: usize },
}
